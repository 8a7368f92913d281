//! Generation options.

use serde::{Deserialize, Serialize};

use crate::naming::NamingPolicy;

/// Options for one generation run.
///
/// Deserializable from the `[codegen]` table of `jsongen.toml`; every key is
/// optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenConfig {
    /// Omit empty fields unless a field tag says otherwise.
    pub omit_empty: bool,
    /// Also emit the allocating `RawMarshaler` adapter per record.
    pub std_adapters: bool,
    /// Path of the runtime crate as seen from the generated code.
    pub runtime_path: String,
    /// Prefix of generated encoder function names.
    pub function_prefix: String,
    /// Key naming for fields without a name override.
    pub naming: NamingPolicy,
    /// Start the output with a "generated, do not edit" comment.
    pub header: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            omit_empty: false,
            std_adapters: true,
            runtime_path: "::jsongen_rt".to_string(),
            function_prefix: "encode_".to_string(),
            naming: NamingPolicy::AsDeclared,
            header: true,
        }
    }
}
