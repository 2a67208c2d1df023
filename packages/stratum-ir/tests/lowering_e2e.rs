//! End-to-end lowering tests
//!
//! Drives the translator through whole method bodies and checks the
//! produced IR structurally and through its textual dump.

use pretty_assertions::assert_eq;

use stratum_ir::{
    AnalysisOptions, BinaryFamily, BinaryOpKind, ConstantNode, Literal, MethodIrBuilder, Operand,
    Rvalue, SourceMethod, SourceStmt, Stmt, VarKind,
};

/// `foo(x, y)` with body `tmp = 5; z = x + tmp;`
fn foo() -> SourceMethod {
    let mut method = SourceMethod::new_static("foo");
    let x = method.add_param("x", "int");
    method.add_param("y", "int");
    let tmp = method.add_local("tmp", "int");
    let z = method.add_local("z", "int");
    method.push_stmt(SourceStmt::Assign {
        lhs: tmp,
        rhs: Rvalue::Constant(ConstantNode::Int(5)),
    });
    method.push_stmt(SourceStmt::Assign {
        lhs: z,
        rhs: Rvalue::Binary {
            op: BinaryOpKind::Add,
            lhs: Operand::Local(x),
            rhs: Operand::Local(tmp),
        },
    });
    method
}

#[test]
fn translates_foo_to_documented_ir() {
    let options = AnalysisOptions::default();
    let out = MethodIrBuilder::new(&options).build(&foo()).unwrap();
    let ir = out.ir;

    assert!(out.skipped.is_empty());
    assert_eq!(ir.receiver(), None);

    let param_names: Vec<&str> = ir.params().iter().map(|&p| ir.var(p).name.as_str()).collect();
    assert_eq!(param_names, vec!["x", "y"]);

    let var_names: Vec<&str> = ir.vars().iter().map(|v| v.name.as_str()).collect();
    assert_eq!(var_names, vec!["x", "y", "tmp", "z"]);

    let x = 0;
    let tmp = 2;
    let z = 3;
    assert_eq!(ir.stmts().len(), 2);
    assert_eq!(
        ir.stmts()[0],
        Stmt::AssignLiteral {
            dst: tmp,
            value: Literal::Int(5)
        }
    );
    match &ir.stmts()[1] {
        Stmt::Binary { dst, op, lhs, rhs } => {
            assert_eq!(*dst, z);
            assert_eq!(op.family(), BinaryFamily::Arithmetic);
            assert_eq!(op.symbol(), "+");
            assert_eq!(*lhs, x);
            assert_eq!(*rhs, tmp);
        }
        other => panic!("expected binary, got {:?}", other),
    }
}

#[test]
fn translating_twice_yields_identical_ir() {
    let options = AnalysisOptions::default();
    let builder = MethodIrBuilder::new(&options);
    let method = foo();

    let first = builder.build(&method).unwrap().ir;
    let second = builder.build(&method).unwrap().ir;

    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn textual_dump_is_diffable() {
    let options = AnalysisOptions::default();
    let ir = MethodIrBuilder::new(&options).build(&foo()).unwrap().ir;

    let dump = ir.to_string();
    let expected = "\
method foo {
  this: <static>
  params: [x, y]
  vars:
    x:int
    y:int
    tmp:int
    z:int
  stmts:
    [0] tmp = 5
    [1] z = x + tmp
}";
    assert_eq!(dump, expected);
}

#[test]
fn constant_operands_get_fresh_temps_per_occurrence() {
    let mut method = SourceMethod::new_static("twice");
    let a = method.add_local("a", "int");
    let b = method.add_local("b", "int");
    for lhs in [a, b] {
        method.push_stmt(SourceStmt::Assign {
            lhs,
            rhs: Rvalue::Binary {
                op: BinaryOpKind::Sub,
                lhs: Operand::Constant(ConstantNode::Int(10)),
                rhs: Operand::Constant(ConstantNode::Int(10)),
            },
        });
    }

    let options = AnalysisOptions::default();
    let ir = MethodIrBuilder::new(&options).build(&method).unwrap().ir;

    let temps: Vec<&str> = ir
        .vars()
        .iter()
        .filter(|v| v.kind == VarKind::ConstantTemp)
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(
        temps,
        vec![
            "#intconstant0",
            "#intconstant1",
            "#intconstant2",
            "#intconstant3"
        ]
    );
    // Four materializations plus two binaries
    assert_eq!(ir.stmts().len(), 6);
}

#[test]
fn method_ir_survives_serde_round_trip() {
    let options = AnalysisOptions::default();
    let ir = MethodIrBuilder::new(&options).build(&foo()).unwrap().ir;

    let json = serde_json::to_string(&ir).unwrap();
    let back: stratum_ir::MethodIr = serde_json::from_str(&json).unwrap();
    assert_eq!(ir, back);
}
