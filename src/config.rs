/// Raw key size in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Length of a standard base64 rendering of `KEY_LEN` bytes, padding included.
pub const ENCODED_KEY_LEN: usize = 44;

/// Name of the variable the generated key is meant to be stored under.
pub const ENV_VAR_NAME: &str = "APP_ENCRYPTION_KEY";

pub const GENERATED_LABEL: &str = "Generated APP_ENCRYPTION_KEY:";
pub const ENV_FILE_HINT: &str = "Add this to your .env file:";
