// Hide missing documentation warning for codegen structs
#![allow(missing_docs)]

/// OAuth authentication scope for GCTTS.
pub const AUTH_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Generated APIs for GCTTS.
pub mod codegen {
    include!("./codegen/google.cloud.texttospeech.v1.rs");
}
