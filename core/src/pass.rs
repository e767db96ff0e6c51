//! # Model Passes
//!
//! The seam between the parser, the rewrites applied to its output, and the
//! renderer.

use crate::model::Model;

/// A rewrite applied to the whole model between parsing and rendering.
///
/// Passes take the model by value and return the rewritten model. They must not
/// fail: anything a pass cannot interpret is left as it was.
pub trait ModelPass {
    /// A short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Rewrites the model.
    fn apply(&self, model: Model) -> Model;
}

/// Runs `passes` in order over `model`.
pub fn run_passes(model: Model, passes: &[&dyn ModelPass]) -> Model {
    passes.iter().fold(model, |model, pass| {
        tracing::debug!(pass = pass.name(), "running model pass");
        pass.apply(model)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Bean;

    struct Rename;

    impl ModelPass for Rename {
        fn name(&self) -> &'static str {
            "rename"
        }

        fn apply(&self, mut model: Model) -> Model {
            for bean in &mut model.beans {
                bean.name.push('X');
            }
            model
        }
    }

    #[test]
    fn test_run_passes_in_order() {
        let model = Model::new(vec![Bean::new("A")], Vec::new(), Vec::new());
        let result = run_passes(model, &[&Rename, &Rename]);
        assert_eq!(result.beans[0].name, "AXX");
    }

    #[test]
    fn test_run_no_passes() {
        let model = Model::new(vec![Bean::new("A")], Vec::new(), Vec::new());
        assert_eq!(run_passes(model.clone(), &[]), model);
    }
}
