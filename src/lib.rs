pub mod error;
pub mod instance;
pub mod matrix;
pub mod parse;
pub mod structure;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Once;

use tracing::info;

pub use error::ConvertError;
pub use instance::TspInstance;
pub use structure::AtspFile;

static INIT: Once = Once::new();

pub fn initialize_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    });
}

fn write_tsp(instance: &TspInstance, path: &Path) -> Result<(), ConvertError> {
    let text = instance.to_tsp();
    let mut file = File::create(path).map_err(|e| ConvertError::file_access(path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| ConvertError::file_access(path, e))
}

pub fn parse(atsp_file: &Path) -> Result<TspInstance, ConvertError> {
    info!("Parsing file {:?}", atsp_file);
    let atsp = structure::parse_atsp_file(atsp_file)?;
    Ok(TspInstance::new(&atsp))
}

pub fn convert_str(text: &str) -> Result<String, ConvertError> {
    let atsp = structure::parse_atsp(text)?;
    Ok(TspInstance::new(&atsp).to_tsp())
}

/// Converts `atsp_file` and writes the symmetric instance to `tsp_file`,
/// overwriting it. Nothing is written unless parsing succeeds.
pub fn convert_file(atsp_file: &Path, tsp_file: &Path) -> Result<TspInstance, ConvertError> {
    let instance = parse(atsp_file)?;
    write_tsp(&instance, tsp_file)?;
    info!(
        "Wrote {}-node instance to {:?}",
        instance.matrix().dimension(),
        tsp_file
    );
    Ok(instance)
}
