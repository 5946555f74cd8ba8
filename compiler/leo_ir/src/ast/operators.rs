//! Operators and the precedence table.
//!
//! This table is the single source of truth for operator binding. The parser
//! derives Pratt binding powers from it and the formatter derives where
//! parentheses are required, so the two can never disagree.
//!
//! | Level | Operators                  | Assoc |
//! |-------|----------------------------|-------|
//! | 1     | `=` `+=` `-=` `*=` `/=` `%=` | right |
//! | 2     | `\|\|`                     | left  |
//! | 3     | `&&`                       | left  |
//! | 4     | `==` `!=`                  | left  |
//! | 5     | `<` `<=` `>` `>=`          | left  |
//! | 6     | `+` `-`                    | left  |
//! | 7     | `*` `/` `%`                | left  |
//! | 8     | prefix `-` `!`             |       |
//! | 9     | `**`                       | right |
//! | 10    | call, index, field         | left  |

/// Precedence level. Higher binds tighter.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Precedence(pub u8);

impl Precedence {
    pub const ASSIGN: Precedence = Precedence(1);
    pub const OR: Precedence = Precedence(2);
    pub const AND: Precedence = Precedence(3);
    pub const EQUALITY: Precedence = Precedence(4);
    pub const COMPARISON: Precedence = Precedence(5);
    pub const ADDITIVE: Precedence = Precedence(6);
    pub const MULTIPLICATIVE: Precedence = Precedence(7);
    pub const PREFIX: Precedence = Precedence(8);
    pub const POWER: Precedence = Precedence(9);
    pub const POSTFIX: Precedence = Precedence(10);
    /// Literals, identifiers, arrays: never need parentheses.
    pub const ATOM: Precedence = Precedence(11);

    /// Pratt binding powers `(left, right)` for an infix operator at this level.
    ///
    /// An operator keeps extending the current expression while its left
    /// power is at least the caller's minimum. Left-associative operators
    /// parse their right operand one notch tighter so an equal operator
    /// stops there; right-associative ones do not.
    #[inline]
    pub const fn infix_binding_power(self, assoc: Assoc) -> (u8, u8) {
        let left = self.0 * 2;
        match assoc {
            Assoc::Left => (left, left + 1),
            Assoc::Right => (left, left),
        }
    }

    /// Minimum binding power for the operand of a prefix operator.
    #[inline]
    pub const fn prefix_binding_power() -> u8 {
        Precedence::PREFIX.0 * 2
    }
}

/// Operator associativity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Assoc {
    Left,
    Right,
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Logical
    Or,
    And,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
        }
    }

    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Or => Precedence::OR,
            Self::And => Precedence::AND,
            Self::Eq | Self::NotEq => Precedence::EQUALITY,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => Precedence::COMPARISON,
            Self::Add | Self::Sub => Precedence::ADDITIVE,
            Self::Mul | Self::Div | Self::Mod => Precedence::MULTIPLICATIVE,
            Self::Pow => Precedence::POWER,
        }
    }

    pub const fn assoc(self) -> Assoc {
        match self {
            Self::Pow => Assoc::Right,
            _ => Assoc::Left,
        }
    }

    #[inline]
    pub const fn binding_power(self) -> (u8, u8) {
        self.precedence().infix_binding_power(self.assoc())
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
        }
    }
}

/// Assignment operators. All share [`Precedence::ASSIGN`] and are
/// right-associative.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl AssignOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::Add => "+=",
            Self::Sub => "-=",
            Self::Mul => "*=",
            Self::Div => "/=",
            Self::Mod => "%=",
        }
    }

    #[inline]
    pub const fn binding_power() -> (u8, u8) {
        Precedence::ASSIGN.infix_binding_power(Assoc::Right)
    }
}
