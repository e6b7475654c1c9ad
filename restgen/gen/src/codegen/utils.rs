//! Fixed utility modules (`utils/*.ts`).
//!
//! These do not depend on the schema. `apiSettings` holds the mutable
//! endpoint configuration and `getAPIAxiosInstance` builds a client from it
//! on every call, preferring the Unix socket when both are set.

use super::axios::CLIENT_FACTORY;
use super::fragment::{TsImport, TsItem, TsModule};

/// Message thrown by the client factory when no endpoint is configured.
pub const MISSING_ENDPOINT_MESSAGE: &str = "URL or Unix Socket is not set";

const API_SETTINGS: &str = r#"let url: string | undefined = undefined;
let unixSocket: string | undefined = undefined;

export const apiSettings = {
    setURL: (newURL: string) => {
        url = newURL;
    },
    getURL: () => {
        return url;
    },
    setUnixSocket: (newUnixSocket: string) => {
        unixSocket = newUnixSocket;
    },
    getUnixSocket: () => {
        return unixSocket;
    },
};
"#;

/// `utils/apiSettings.ts`
pub fn generate_api_settings() -> TsModule {
    TsModule::new().item(TsItem::Raw(API_SETTINGS.to_string()))
}

/// `utils/getAxiosInstance.ts`
pub fn generate_client_factory() -> TsModule {
    let body = format!(
        r#"export const {CLIENT_FACTORY} = () => {{
    const unixSocket = apiSettings.getUnixSocket();
    const url = apiSettings.getURL();

    if (!url && !unixSocket) {{
        throw new Error('{MISSING_ENDPOINT_MESSAGE}');
    }}
    if (unixSocket) {{
        return axios.create({{ baseURL: 'http://localhost', socketPath: unixSocket }});
    }}
    return axios.create({{ baseURL: url }});
}};
"#
    );

    TsModule::new()
        .import(TsImport::default_export("axios", "axios"))
        .import(TsImport::single("apiSettings", "./apiSettings"))
        .item(TsItem::Raw(body))
}

/// `utils/index.ts`
pub fn generate_utils_index() -> TsModule {
    TsModule::new()
        .re_export("./apiSettings")
        .re_export("./getAxiosInstance")
}
