use crate::{
    error::{CompileError, ErrorKind, Result},
    eval::truthiness,
};
use model::FilterSink;
use query_syntax::{Expression, ExpressionKind};

/// A bare value used as the whole predicate: matches every document when
/// truthy, none otherwise.
pub(crate) fn compile_truthy(sink: &mut dyn FilterSink, node: &Expression) -> Result<()> {
    if matches!(
        node.kind,
        ExpressionKind::Reference(_) | ExpressionKind::AttributeAccess { .. }
    ) {
        return Err(CompileError::unsupported(
            format!("{} cannot be used as a filter on its own", node.describe()),
            node.span,
        ));
    }

    match truthiness(node) {
        Ok(true) => sink.add_all(),
        Ok(false) => sink.add_empty(),
        Err(err) if err.kind() == ErrorKind::NotConstant => {
            return Err(CompileError::unsupported(
                format!("{} depends on document values", node.describe()),
                node.span,
            ));
        }
        Err(err) => return Err(err),
    }
    Ok(())
}
