//! Up-front checks on command-line paths, run before any file is parsed.

use std::path::Path;

use langdump::LanguageDirectory;

/// Validate file path exists and is a regular file
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate that a game install contains a `languages` folder
pub fn validate_game_dir(game_dir: &str) -> Result<(), String> {
    let languages = Path::new(game_dir).join(LanguageDirectory::DIR_NAME);
    if !languages.is_dir() {
        return Err(format!(
            "Given game path does not contain a {} folder: {}",
            LanguageDirectory::DIR_NAME,
            game_dir
        ));
    }
    Ok(())
}

/// Validate the language configuration file
pub fn validate_language_types(path: &str) -> Result<(), String> {
    validate_file_path(path).map_err(|e| format!("Invalid language types file: {}", e))
}

/// Validate output path is not an existing directory
pub fn validate_output_path(path: &str) -> Result<(), String> {
    if path.trim().is_empty() {
        return Err("Output path cannot be empty".to_string());
    }
    if Path::new(path).is_dir() {
        return Err(format!("Output path is a directory: {}", path));
    }
    Ok(())
}
