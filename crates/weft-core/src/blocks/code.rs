//! Code block

use crate::error::{WeftError, WeftResult};

use super::{Block, BlockKind, FunctionIdBlock};

/// One parsed `{{ ... }}` span: a variable reference, a literal, or a
/// function call with arguments
///
/// Structural rules, checked at construction: the block is never empty;
/// the first sub-block is a value, variable, or function identifier; and
/// when more than one sub-block is present the first must be a function
/// identifier, the second a value, variable, or named argument, and every
/// later one a named argument.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    /// Trimmed text between the `{{` and `}}` delimiters
    pub content: String,
    /// Validated sub-blocks in source order
    pub blocks: Vec<Block>,
}

impl CodeBlock {
    /// Validate an ordered sub-block sequence into a code block
    pub fn new(content: impl Into<String>, blocks: Vec<Block>) -> WeftResult<Self> {
        let content = content.into();

        let Some(first) = blocks.first() else {
            return Err(WeftError::syntax("code block is empty"));
        };
        match first.kind() {
            BlockKind::Value | BlockKind::Variable | BlockKind::FunctionId => {}
            kind => {
                return Err(WeftError::syntax(format!(
                    "code block '{content}' cannot start with a {kind} ('{}')",
                    first.content()
                )));
            }
        }

        if blocks.len() > 1 {
            if first.kind() != BlockKind::FunctionId {
                return Err(WeftError::syntax(format!(
                    "code block '{content}' with arguments must start with a function \
                     identifier, found {} ('{}')",
                    first.kind(),
                    first.content()
                )));
            }
            for (index, block) in blocks.iter().enumerate().skip(1) {
                let valid = match block.kind() {
                    BlockKind::Value | BlockKind::Variable => index == 1,
                    BlockKind::NamedArg => true,
                    _ => false,
                };
                if !valid {
                    return Err(WeftError::syntax(format!(
                        "code block '{content}' has a misplaced {} ('{}') at position \
                         {index}; only the first argument may be positional",
                        block.kind(),
                        block.content()
                    )));
                }
            }
        }

        Ok(Self { content, blocks })
    }

    /// The function identifier, when this block is a function call
    pub fn function_id(&self) -> Option<&FunctionIdBlock> {
        match self.blocks.first() {
            Some(Block::FunctionId(id)) => Some(id),
            _ => None,
        }
    }

    /// Sub-blocks after the first, i.e. the call arguments
    pub fn args(&self) -> &[Block] {
        self.blocks.get(1..).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{NamedArgBlock, ValueBlock, VariableBlock};

    fn value(token: &str) -> Block {
        Block::Value(ValueBlock::parse(token).unwrap())
    }

    fn variable(token: &str) -> Block {
        Block::Variable(VariableBlock::parse(token).unwrap())
    }

    fn function(token: &str) -> Block {
        Block::FunctionId(FunctionIdBlock::parse(token).unwrap())
    }

    fn named(token: &str) -> Block {
        Block::NamedArg(NamedArgBlock::parse(token).unwrap())
    }

    #[test]
    fn test_sole_value_is_valid() {
        let code = CodeBlock::new("'abc'", vec![value("'abc'")]).unwrap();
        assert!(code.function_id().is_none());
    }

    #[test]
    fn test_sole_variable_is_valid() {
        let code = CodeBlock::new("$x", vec![variable("$x")]).unwrap();
        assert!(code.function_id().is_none());
        assert!(code.args().is_empty());
    }

    #[test]
    fn test_function_call_with_arguments() {
        let code = CodeBlock::new(
            "greet $name style=\"formal\" upper=$flag",
            vec![
                function("greet"),
                variable("$name"),
                named("style=\"formal\""),
                named("upper=$flag"),
            ],
        )
        .unwrap();
        assert_eq!(code.function_id().unwrap().function_name, "greet");
        assert_eq!(code.args().len(), 3);
    }

    #[test]
    fn test_empty_block_is_rejected() {
        assert!(CodeBlock::new("", Vec::new()).is_err());
    }

    #[test]
    fn test_leading_named_arg_is_rejected() {
        assert!(CodeBlock::new("a=1", vec![named("a=1")]).is_err());
    }

    #[test]
    fn test_multiple_blocks_require_function_first() {
        assert!(CodeBlock::new("'a' 'b'", vec![value("'a'"), value("'b'")]).is_err());
        assert!(CodeBlock::new("$x $y", vec![variable("$x"), variable("$y")]).is_err());
    }

    #[test]
    fn test_second_positional_argument_is_rejected() {
        assert!(CodeBlock::new(
            "fn $x 'y'",
            vec![function("fn"), variable("$x"), value("'y'")],
        )
        .is_err());
    }

    #[test]
    fn test_positional_after_named_is_rejected() {
        assert!(CodeBlock::new(
            "fn a=1 $x",
            vec![function("fn"), named("a=1"), variable("$x")],
        )
        .is_err());
    }
}
