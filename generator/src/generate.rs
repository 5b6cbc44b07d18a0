use std::fs::File;
use std::io::BufWriter;

use offline_manifest::source_record::SourceList;

use crate::collect::collect_sources;
use crate::config::GenerateConfig;
use crate::error::GeneratorError;
use crate::lockfile::LockDocument;
use crate::{error_print, info_print};

/// The main generation pipeline,
/// load, traverse, emit; per-entry failures never abort the run.
pub fn generate(config: GenerateConfig) -> i32 {
    info_print(
        "Processing",
        &config.get_lockfile().display().to_string(),
    );

    let doc = match LockDocument::load(config.get_lockfile()) {
        Ok(doc) => doc,
        Err(err) => {
            error_print(&err.to_string());
            return err.exit_code();
        }
    };

    let sources = collect_sources(&doc);

    if let Err(err) = emit(&sources, &config) {
        error_print(&err.to_string());
        return err.exit_code();
    }

    info_print(
        "Finished",
        &format!(
            "generated {} sources in {}",
            sources.len(),
            config.get_output().display()
        ),
    );

    0
}

fn emit(sources: &SourceList, config: &GenerateConfig) -> Result<(), GeneratorError> {
    let file = File::create(config.get_output()).map_err(|e| {
        GeneratorError::Io(format!(
            "cannot write output {}: {e}",
            config.get_output().display()
        ))
    })?;

    sources
        .write_to(BufWriter::new(file))
        .map_err(GeneratorError::Io)
}
