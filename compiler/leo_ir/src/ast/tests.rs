use super::*;
use pretty_assertions::assert_eq;

fn int(value: u64, start: u32) -> Expr {
    Expr::new(ExprKind::Int(value), Span::new(start, start + 1))
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

#[test]
fn binding_powers_follow_table() {
    // Tighter levels have strictly larger left powers.
    assert!(BinaryOp::Mul.binding_power().0 > BinaryOp::Add.binding_power().0);
    assert!(BinaryOp::Add.binding_power().0 > BinaryOp::Lt.binding_power().0);
    assert!(BinaryOp::Lt.binding_power().0 > BinaryOp::Eq.binding_power().0);
    assert!(BinaryOp::Eq.binding_power().0 > BinaryOp::And.binding_power().0);
    assert!(BinaryOp::And.binding_power().0 > BinaryOp::Or.binding_power().0);
    assert!(BinaryOp::Or.binding_power().0 > AssignOp::binding_power().0);
}

#[test]
fn associativity_encoded_in_binding_powers() {
    let (l, r) = BinaryOp::Sub.binding_power();
    assert!(r > l, "left-assoc right operand must bind tighter");
    let (l, r) = BinaryOp::Pow.binding_power();
    assert_eq!(l, r, "right-assoc operand binds equally");
    let (l, r) = AssignOp::binding_power();
    assert_eq!(l, r);
}

#[test]
fn power_binds_tighter_than_prefix() {
    let prefix = Precedence::prefix_binding_power();
    assert!(BinaryOp::Pow.binding_power().0 > prefix);
    assert!(BinaryOp::Mul.binding_power().0 < prefix);
}

#[test]
fn erase_spans_makes_trees_comparable() {
    let mut a = Program {
        stmts: vec![Stmt::new(
            StmtKind::Expr(binary(BinaryOp::Add, int(1, 0), int(2, 4))),
            Span::new(0, 5),
        )],
        span: Span::new(0, 5),
    };
    let mut b = Program {
        stmts: vec![Stmt::new(
            StmtKind::Expr(binary(BinaryOp::Add, int(1, 1), int(2, 9))),
            Span::new(1, 10),
        )],
        span: Span::new(0, 12),
    };
    assert_ne!(a, b);
    a.erase_spans();
    b.erase_spans();
    assert_eq!(a, b);
}

#[test]
fn simple_and_compound_statements() {
    let block = Stmt::new(
        StmtKind::Block(Block {
            stmts: vec![],
            span: Span::new(0, 2),
        }),
        Span::new(0, 2),
    );
    let expr = Stmt::new(StmtKind::Expr(int(1, 0)), Span::new(0, 1));
    let if_block = Stmt::new(
        StmtKind::If {
            cond: int(1, 0),
            then_branch: Box::new(block.clone()),
            else_branch: None,
        },
        Span::new(0, 2),
    );
    let if_else_expr = Stmt::new(
        StmtKind::If {
            cond: int(1, 0),
            then_branch: Box::new(block.clone()),
            else_branch: Some(Box::new(expr.clone())),
        },
        Span::new(0, 2),
    );
    assert!(!block.is_simple());
    assert!(expr.is_simple());
    assert!(!if_block.is_simple());
    assert!(!if_else_expr.is_simple());
    assert!(Stmt::new(StmtKind::Break, Span::new(0, 5)).is_simple());
}

#[test]
fn precedence_of_expressions() {
    let sum = binary(BinaryOp::Add, int(1, 0), int(2, 2));
    assert_eq!(sum.precedence(), Precedence::ADDITIVE);
    assert_eq!(int(1, 0).precedence(), Precedence::ATOM);
    assert!(Expr::new(ExprKind::Ident("x".into()), Span::DUMMY).is_place());
    assert!(!sum.is_place());
}

const DEEP: usize = 1_000_000;

fn deep_negation(depth: usize) -> Expr {
    let mut expr = Expr::new(ExprKind::Ident("x".into()), Span::new(0, 1));
    for _ in 0..depth {
        expr = Expr::new(
            ExprKind::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(expr),
            },
            Span::new(0, 1),
        );
    }
    expr
}

#[test]
fn deep_expression_drops_on_a_small_stack() {
    drop(deep_negation(DEEP));

    let mut chain = int(0, 0);
    for i in 0..DEEP {
        chain = binary(BinaryOp::Add, chain, int(i as u64, 0));
    }
    drop(chain);
}

#[test]
fn deep_statement_nesting_drops_on_a_small_stack() {
    let mut stmt = Stmt::new(StmtKind::Break, Span::new(0, 5));
    for i in 0..DEEP {
        let kind = if i % 2 == 0 {
            StmtKind::While {
                cond: int(1, 0),
                body: Box::new(stmt),
            }
        } else {
            StmtKind::Block(Block {
                stmts: vec![stmt],
                span: Span::new(0, 2),
            })
        };
        stmt = Stmt::new(kind, Span::new(0, 2));
    }
    drop(stmt);
}

#[test]
fn drop_leaves_siblings_intact() {
    let call = Expr::new(
        ExprKind::Call {
            callee: Box::new(int(1, 0)),
            args: vec![int(2, 2), int(3, 4)],
        },
        Span::new(0, 5),
    );
    let copy = call.clone();
    drop(call);
    assert!(matches!(&copy.kind, ExprKind::Call { args, .. } if args.len() == 2));
}

#[test]
fn erase_spans_on_deep_tree() {
    let mut program = Program {
        stmts: vec![Stmt::new(StmtKind::Expr(deep_negation(200_000)), Span::new(0, 1))],
        span: Span::new(0, 1),
    };
    program.erase_spans();
    assert_eq!(program.span, Span::DUMMY);
    assert_eq!(program.stmts[0].span, Span::DUMMY);
    let StmtKind::Expr(expr) = &program.stmts[0].kind else {
        panic!("expected expression statement");
    };
    assert_eq!(expr.span, Span::DUMMY);
}
