//! Materialization of mappers.

use crate::{generator, metadata::CompileCx, MapperMetadata, Procedure};
use automap_core::Result;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Turns mapper metadata into an executable [`Procedure`].
///
/// Loading is idempotent per mapper identity: a second load of the same
/// identity returns the procedure materialized by the first.
pub trait Loader {
    fn load(&self, metadata: &MapperMetadata, cx: &CompileCx<'_>) -> Result<Rc<Procedure>>;
}

/// Compiles procedures in process and keeps them for the life of the loader.
#[derive(Debug, Default)]
pub struct EvalLoader {
    procedures: RefCell<HashMap<String, Rc<Procedure>>>,
}

impl EvalLoader {
    pub fn new() -> EvalLoader {
        EvalLoader::default()
    }
}

impl Loader for EvalLoader {
    fn load(&self, metadata: &MapperMetadata, cx: &CompileCx<'_>) -> Result<Rc<Procedure>> {
        if let Some(procedure) = self.procedures.borrow().get(metadata.identity()) {
            return Ok(procedure.clone());
        }

        // Compiling asks the registry about nested pairs, so no borrow is
        // held here.
        let procedure = Rc::new(generator::generate(metadata, cx)?);

        tracing::debug!(
            mapper = metadata.identity(),
            properties = procedure.properties.len(),
            dependencies = procedure.dependencies.len(),
            "compiled mapper"
        );

        self.procedures
            .borrow_mut()
            .insert(metadata.identity().to_string(), procedure.clone());

        Ok(procedure)
    }
}
