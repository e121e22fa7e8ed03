use crate::output_utils;
use crate::types_file::TypesFile;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgqlshape::operation::QueryCompiler;
use libgqlshape::operation::QuerySpec;
use libgqlshape::types::TypeRegistry;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CompileCmd {
    #[arg(
        help="Print only the compiled query documents instead of the full \
             JSON request payloads.",
        long,
    )]
    document_only: bool,

    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for query \
             spec files within a directory.",
        long,
        value_delimiter = ',',
    )]
    query_spec_exts: Vec<String>,

    #[arg(
        help="Path to a JSON file describing the object and enum types that \
             query specs are compiled against.",
        long,
    )]
    types: PathBuf,

    #[arg(
        help="Paths to one or more query spec files or directories containing \
             query spec files which need to be compiled.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl CompileCmd {
    /// Find all query spec files recursively located at or under each path
    /// passed as an arg.
    fn find_query_spec_files(
        &self,
        errors: &mut Vec<anyhow::Error>,
    ) -> Vec<PathBuf> {
        let query_spec_exts: HashSet<String> =
            self.query_spec_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        log::trace!("Found file at {path:#?}.");
                        if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                            && query_spec_exts.contains(&*ext) {
                            file_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.into());
                    },
                }
            }
        }

        // A single explicit file is compiled even if its extension doesn't
        // match any of `query_spec_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to compile {first_arg_path:#?} even though it \
                doesn't match any of the --query-spec-exts ({}).",
                query_spec_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        file_paths
    }

    fn compile_file(
        &self,
        compiler: &QueryCompiler<'_>,
        path: &Path,
    ) -> anyhow::Result<String> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failure reading query spec {path:#?}"))?;
        let spec: QuerySpec = serde_json::from_str(&contents)
            .with_context(|| format!("Failure parsing query spec {path:#?}"))?;
        let compiled = compiler.compile(&spec)
            .with_context(|| format!("Failure compiling query spec {path:#?}"))?;

        Ok(if self.document_only {
            compiled.document().to_string()
        } else {
            compiled.payload().to_string()
        })
    }

    fn load_registry(&self) -> anyhow::Result<TypeRegistry> {
        let types_file = TypesFile::load(&self.types)?;
        types_file.into_registry()
            .with_context(|| format!("Invalid type definitions in {:#?}", self.types))
    }
}

#[inherent::inherent]
impl RunnableCommand for CompileCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let registry = match self.load_registry() {
            Ok(registry) => registry,
            Err(e) => return CommandResult::failure(format!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Loaded {} object types and {} enums from {:#?}.",
            registry.object_types().len(),
            registry.enums().len(),
            self.types,
        );

        let mut errors: Vec<anyhow::Error> = vec![];
        let file_paths = self.find_query_spec_files(&mut errors);
        log::debug!(
            "Found {} query spec files to be compiled.",
            file_paths.len(),
        );

        let compiler = QueryCompiler::new(&registry);
        let mut outputs = vec![];
        for path in &file_paths {
            match self.compile_file(&compiler, path) {
                Ok(output) if file_paths.len() == 1 => outputs.push(output),
                Ok(output) => outputs.push(format!("# {}\n{output}", path.display())),
                Err(e) => errors.push(e),
            }
        }

        let failures = errors.iter()
            .map(|e| format!("{} {e:#}", output_utils::RED_X))
            .collect::<Vec<_>>();
        if failures.is_empty() {
            log::info!(
                "{} Compiled {} query specs.",
                output_utils::GREEN_CHECK,
                outputs.len(),
            );
        } else {
            log::error!(
                "{} of {} query specs failed to compile.",
                failures.len(),
                file_paths.len(),
            );
        }
        CommandResult::from_outputs(outputs, failures)
    }
}
