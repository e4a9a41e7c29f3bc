use libpack_config::is_valid_identifier;

/// Parse and validate a global variable name for UMD bundles.
///
/// Valid identifiers: MyLibrary, _internal, $jquery, lib123
/// Invalid identifiers: 123abc, my-lib, my.lib, ""
pub fn parse_global(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Global name cannot be empty".to_string());
    }

    is_valid_identifier(s).map_err(|reason| format!("Global name {reason}: '{s}'"))?;
    Ok(s.to_string())
}
