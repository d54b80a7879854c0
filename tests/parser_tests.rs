use pseudoc::errors::{PseudoError, PseudoResult};
use pseudoc::frontend::TokenKind;
use pseudoc::{parse, parse_source, Node, NodeKind};

fn statements(lines: &[&str]) -> PseudoResult<Vec<Node>> {
    let program = parse(lines.iter().copied())?.expect("program has statements");
    assert_eq!(program.kind, NodeKind::Program);
    Ok(program.sub_nodes)
}

fn statement(lines: &[&str]) -> PseudoResult<Node> {
    let mut stmts = statements(lines)?;
    assert_eq!(stmts.len(), 1, "expected a single statement");
    Ok(stmts.remove(0))
}

fn error_text(lines: &[&str]) -> String {
    match parse(lines.iter().copied()) {
        Ok(ast) => panic!("Expected a syntax error, but parsed: {:?}", ast),
        Err(e) => e.to_string(),
    }
}

fn id(name: &str) -> Node {
    Node::identifier(name)
}

fn int(val: i64) -> Node {
    Node::leaf(NodeKind::IntLiteral(val))
}

fn num(val: f64) -> Node {
    Node::leaf(NodeKind::NumLiteral(val))
}

fn string(val: &str) -> Node {
    Node::leaf(NodeKind::StrLiteral(val.to_string()))
}

fn add(op: TokenKind, left: Node, right: Node) -> Node {
    Node::binary(NodeKind::AddOp(op), left, right)
}

fn mul(op: TokenKind, left: Node, right: Node) -> Node {
    Node::binary(NodeKind::MulOp(op), left, right)
}

fn pow(left: Node, right: Node) -> Node {
    Node::binary(NodeKind::PowOp(TokenKind::Power), left, right)
}

fn cmp(op: TokenKind, left: Node, right: Node) -> Node {
    Node::binary(NodeKind::CmpOp(op), left, right)
}

fn neg(operand: Node) -> Node {
    Node::unary(NodeKind::Negate, operand)
}

fn args(items: Vec<Node>) -> Node {
    Node::new(NodeKind::Args, items)
}

fn call(callee: Node, items: Vec<Node>) -> Node {
    Node::new(NodeKind::Call, vec![callee, args(items)])
}

fn index(object: Node, items: Vec<Node>) -> Node {
    Node::new(NodeKind::Index, vec![object, args(items)])
}

fn field(object: Node, name: &str) -> Node {
    Node::new(NodeKind::Field(name.to_string()), vec![object])
}

fn assign(target: Node, value: Node) -> Node {
    Node::binary(NodeKind::Assign { is_global: false }, target, value)
}

fn param(name: &str, is_byref: bool) -> Node {
    Node::leaf(NodeKind::Param {
        is_byref,
        name: name.to_string(),
    })
}

#[test]
fn test_empty_input() -> PseudoResult<()> {
    assert_eq!(parse(Vec::<String>::new())?, None);
    assert_eq!(parse(vec![""; 100])?, None);
    assert_eq!(parse(vec![" ".repeat(100); 100])?, None);
    assert_eq!(parse(vec!["// nothing but comments", "   // here"])?, None);
    Ok(())
}

#[test]
fn test_array_declaration() -> PseudoResult<()> {
    let stmt = statement(&["array x[2, y]"])?;
    assert_eq!(
        stmt,
        Node::leaf(NodeKind::ArrayDecl {
            is_global: false,
            name: "x".to_string(),
            dims: vec![int(2), id("y")],
        })
    );
    Ok(())
}

#[test]
fn test_global_array_declaration() -> PseudoResult<()> {
    let stmt = statement(&["global array y[3, 5 * n]"])?;
    assert_eq!(
        stmt,
        Node::leaf(NodeKind::ArrayDecl {
            is_global: true,
            name: "y".to_string(),
            dims: vec![int(3), mul(TokenKind::Multiply, int(5), id("n"))],
        })
    );
    Ok(())
}

#[test]
fn test_array_declaration_errors() {
    assert_eq!(error_text(&["global array y[]"]), "Syntax error: list of expressions expected");
    assert_eq!(error_text(&["array x[]"]), "Syntax error: list of expressions expected");
    let result = parse(vec!["global array []"]);
    assert!(matches!(
        result,
        Err(PseudoError::SyntaxError { ref expected, .. }) if expected == "identifier"
    ));
    assert_eq!(error_text(&["global x[3,3]"]), "Syntax error: '=' expected");
}

#[test]
fn test_assignment_with_precedence() -> PseudoResult<()> {
    let stmt = statement(&["x = 3 + 4 * 5"])?;
    assert_eq!(
        stmt,
        assign(id("x"), add(TokenKind::Plus, int(3), mul(TokenKind::Multiply, int(4), int(5))))
    );
    Ok(())
}

#[test]
fn test_global_assignment() -> PseudoResult<()> {
    let stmt = statement(&["global total = 0"])?;
    assert_eq!(stmt, Node::binary(NodeKind::Assign { is_global: true }, id("total"), int(0)));
    Ok(())
}

#[test]
fn test_unary_minus_binds_to_its_operand() -> PseudoResult<()> {
    let stmt = statement(&["x = -3 * 5"])?;
    assert_eq!(stmt, assign(id("x"), mul(TokenKind::Multiply, neg(int(3)), int(5))));
    let stmt = statement(&["x = -2 ^ 2"])?;
    assert_eq!(stmt, assign(id("x"), pow(neg(int(2)), int(2))));
    Ok(())
}

#[test]
fn test_power_is_right_associative() -> PseudoResult<()> {
    let stmt = statement(&["x = 2 ^ 3 ^ 2"])?;
    assert_eq!(stmt, assign(id("x"), pow(int(2), pow(int(3), int(2)))));
    Ok(())
}

#[test]
fn test_left_associative_subtraction() -> PseudoResult<()> {
    let stmt = statement(&["x = 10 - 4 - 3"])?;
    assert_eq!(
        stmt,
        assign(id("x"), add(TokenKind::Minus, add(TokenKind::Minus, int(10), int(4)), int(3)))
    );
    Ok(())
}

#[test]
fn test_boolean_expression() -> PseudoResult<()> {
    let stmt = statement(&["x = NOT (y == 3.09 OR 4 != 6) AND y > 7"])?;
    let inner = add(
        TokenKind::Or,
        cmp(TokenKind::Equal, id("y"), num(3.09)),
        cmp(TokenKind::NotEqual, int(4), int(6)),
    );
    let expected = mul(
        TokenKind::And,
        Node::unary(NodeKind::Not, inner),
        cmp(TokenKind::GreaterThan, id("y"), int(7)),
    );
    assert_eq!(stmt, assign(id("x"), expected));
    Ok(())
}

#[test]
fn test_not_covers_a_comparison() -> PseudoResult<()> {
    let stmt = statement(&["x = NOT a == b"])?;
    assert_eq!(
        stmt,
        assign(id("x"), Node::unary(NodeKind::Not, cmp(TokenKind::Equal, id("a"), id("b"))))
    );
    Ok(())
}

#[test]
fn test_not_operand_stops_at_the_enclosing_operator() -> PseudoResult<()> {
    let not_b = Node::unary(NodeKind::Not, id("b"));
    let stmt = statement(&["x = a + NOT b == c"])?;
    assert_eq!(
        stmt,
        assign(id("x"), cmp(TokenKind::Equal, add(TokenKind::Plus, id("a"), not_b.clone()), id("c")))
    );
    let stmt = statement(&["x = a * NOT b + c"])?;
    assert_eq!(
        stmt,
        assign(id("x"), add(TokenKind::Plus, mul(TokenKind::Multiply, id("a"), not_b), id("c")))
    );
    let stmt = statement(&["x = a AND NOT b == c"])?;
    assert_eq!(
        stmt,
        assign(
            id("x"),
            mul(
                TokenKind::And,
                id("a"),
                Node::unary(NodeKind::Not, cmp(TokenKind::Equal, id("b"), id("c")))
            )
        )
    );
    Ok(())
}

#[test]
fn test_boolean_literals() -> PseudoResult<()> {
    let stmt = statement(&["x = true AND false"])?;
    assert_eq!(
        stmt,
        assign(
            id("x"),
            mul(
                TokenKind::And,
                Node::leaf(NodeKind::BoolLiteral(true)),
                Node::leaf(NodeKind::BoolLiteral(false))
            )
        )
    );
    Ok(())
}

#[test]
fn test_long_arithmetic_expression() -> PseudoResult<()> {
    let stmt = statement(&["x = -3.2 + 4 * 5 / (5 - 2 ^ 2) MOD (3 DIV 2)"])?;
    let product = mul(TokenKind::Multiply, int(4), int(5));
    let quotient = mul(
        TokenKind::Divide,
        product,
        add(TokenKind::Minus, int(5), pow(int(2), int(2))),
    );
    let modulo = mul(TokenKind::Mod, quotient, mul(TokenKind::Div, int(3), int(2)));
    assert_eq!(stmt, assign(id("x"), add(TokenKind::Plus, neg(num(3.2)), modulo)));
    Ok(())
}

#[test]
fn test_string_comparison() -> PseudoResult<()> {
    let stmt = statement(&["x = y == \"3\""])?;
    assert_eq!(stmt, assign(id("x"), cmp(TokenKind::Equal, id("y"), string("3"))));
    Ok(())
}

#[test]
fn test_member_of_call_assignment() -> PseudoResult<()> {
    let stmt = statement(&["f(a).b = c"])?;
    assert_eq!(stmt, assign(field(call(id("f"), vec![id("a")]), "b"), id("c")));
    Ok(())
}

#[test]
fn test_long_access_chain_assignment() -> PseudoResult<()> {
    let stmt = statement(&["a.f(b)[c].d = e"])?;
    let target = field(index(call(field(id("a"), "f"), vec![id("b")]), vec![id("c")]), "d");
    assert_eq!(stmt, assign(target, id("e")));
    Ok(())
}

#[test]
fn test_matrix_element_assignment() -> PseudoResult<()> {
    let stmt = statement(&["x.y[0, 1] = -3"])?;
    assert_eq!(stmt, assign(index(field(id("x"), "y"), vec![int(0), int(1)]), neg(int(3))));
    let stmt = statement(&["x.y[f(.3)] = 3"])?;
    assert_eq!(
        stmt,
        assign(index(field(id("x"), "y"), vec![call(id("f"), vec![num(0.3)])]), int(3))
    );
    Ok(())
}

#[test]
fn test_if_statement() -> PseudoResult<()> {
    let stmt = statement(&[
        "if x == 3 then",
        "    x = \"4\"",
        "elseif x < 3 then",
        "    x = 5",
        "else",
        "    y = x ^ 2",
        "endif",
    ])?;
    let expected = Node::new(
        NodeKind::If,
        vec![
            Node::new(
                NodeKind::Branch,
                vec![
                    cmp(TokenKind::Equal, id("x"), int(3)),
                    Node::block(vec![assign(id("x"), string("4"))]),
                ],
            ),
            Node::new(
                NodeKind::Branch,
                vec![
                    cmp(TokenKind::LessThan, id("x"), int(3)),
                    Node::block(vec![assign(id("x"), int(5))]),
                ],
            ),
            Node::new(NodeKind::Else, vec![Node::block(vec![assign(id("y"), pow(id("x"), int(2)))])]),
        ],
    );
    assert_eq!(stmt, expected);
    Ok(())
}

#[test]
fn test_nested_if_statements() -> PseudoResult<()> {
    let stmt = statement(&[
        "if a then",
        "    if b then",
        "        x = 1",
        "    endif",
        "elseif c then",
        "    if d then",
        "    else",
        "        y = 2",
        "    endif",
        "endif",
    ])?;
    assert_eq!(stmt.sub_nodes.len(), 2);
    let inner = &stmt.sub_nodes[1].sub_nodes[1].sub_nodes[0];
    assert_eq!(inner.kind, NodeKind::If);
    assert_eq!(inner.sub_nodes[0].sub_nodes[1], Node::block(vec![]));
    assert_eq!(inner.sub_nodes[1].kind, NodeKind::Else);
    Ok(())
}

#[test]
fn test_missing_endif() {
    assert_eq!(error_text(&["if x then", "y = 1"]), "Syntax error: 'endif' expected");
    assert_eq!(error_text(&["if x", "y = 1", "endif"]), "Syntax error: 'then' expected");
}

#[test]
fn test_for_loop() -> PseudoResult<()> {
    let stmt = statement(&["for i = 0 to x - 1", "    print(i)", "next i"])?;
    let expected = Node::new(
        NodeKind::For,
        vec![
            id("i"),
            int(0),
            add(TokenKind::Minus, id("x"), int(1)),
            Node::block(vec![Node::new(NodeKind::Print, vec![id("i")])]),
        ],
    );
    assert_eq!(stmt, expected);
    Ok(())
}

#[test]
fn test_nested_for_loops() -> PseudoResult<()> {
    let stmt = statement(&[
        "for i = 0 to 3",
        "    for j = 0 to 3",
        "        m[i, j] = i * j",
        "    next j",
        "next i",
    ])?;
    let inner = &stmt.sub_nodes[3].sub_nodes[0];
    assert_eq!(inner.kind, NodeKind::For);
    assert_eq!(inner.sub_nodes[0], id("j"));
    assert_eq!(
        inner.sub_nodes[3].sub_nodes[0],
        assign(index(id("m"), vec![id("i"), id("j")]), mul(TokenKind::Multiply, id("i"), id("j")))
    );
    Ok(())
}

#[test]
fn test_for_loop_next_must_name_the_counter() {
    assert_eq!(error_text(&["for i = 0 to 3", "next j"]), "Syntax error: 'next i' expected");
    assert_eq!(error_text(&["for i = 0 to 3", "next"]), "Syntax error: 'next i' expected");
    assert_eq!(error_text(&["for i = 0 to 3", "x = i"]), "Syntax error: 'next' expected");
}

#[test]
fn test_while_loop() -> PseudoResult<()> {
    let stmt = statement(&["while x == y.z OR 9 == 0", "    x = x + 1", "endwhile"])?;
    let condition = add(
        TokenKind::Or,
        cmp(TokenKind::Equal, id("x"), field(id("y"), "z")),
        cmp(TokenKind::Equal, int(9), int(0)),
    );
    let body = Node::block(vec![assign(id("x"), add(TokenKind::Plus, id("x"), int(1)))]);
    assert_eq!(stmt, Node::new(NodeKind::While, vec![condition, body]));
    Ok(())
}

#[test]
fn test_do_until_with_continue() -> PseudoResult<()> {
    let stmt = statement(&["do", "    x = 1", "    y = y + 1", "    continue", "until y == 24"])?;
    let body = Node::block(vec![
        assign(id("x"), int(1)),
        assign(id("y"), add(TokenKind::Plus, id("y"), int(1))),
        Node::leaf(NodeKind::GoToInstr(TokenKind::Continue)),
    ]);
    assert_eq!(
        stmt,
        Node::new(NodeKind::DoUntil, vec![body, cmp(TokenKind::Equal, id("y"), int(24))])
    );
    Ok(())
}

#[test]
fn test_switch_with_cases_and_default() -> PseudoResult<()> {
    let stmt = statement(&[
        "switch x:",
        "    case 1:",
        "        y = 1",
        "    case -2.5:",
        "        y = 2",
        "        break",
        "    case \"three\":",
        "    default:",
        "        y = 0",
        "endswitch",
    ])?;
    let expected = Node::new(
        NodeKind::Switch,
        vec![
            id("x"),
            Node::new(NodeKind::Case, vec![int(1), Node::block(vec![assign(id("y"), int(1))])]),
            Node::new(
                NodeKind::Case,
                vec![
                    neg(num(2.5)),
                    Node::block(vec![
                        assign(id("y"), int(2)),
                        Node::leaf(NodeKind::GoToInstr(TokenKind::Break)),
                    ]),
                ],
            ),
            Node::new(NodeKind::Case, vec![string("three"), Node::block(vec![])]),
            Node::new(NodeKind::Default, vec![Node::block(vec![assign(id("y"), int(0))])]),
        ],
    );
    assert_eq!(stmt, expected);
    Ok(())
}

#[test]
fn test_switch_with_only_default() -> PseudoResult<()> {
    let stmt = statement(&["switch x:", "default:", "x = x ^ 2", "endswitch"])?;
    assert_eq!(stmt.sub_nodes.len(), 2);
    assert_eq!(stmt.sub_nodes[1].kind, NodeKind::Default);
    assert!(stmt.sub_nodes.iter().all(|n| n.kind != NodeKind::Case));
    Ok(())
}

#[test]
fn test_switch_without_default() -> PseudoResult<()> {
    let stmt = statement(&["switch a.b:", "case true:", "print(1)", "case false:", "print(0)", "endswitch"])?;
    assert_eq!(stmt.sub_nodes[0], field(id("a"), "b"));
    assert_eq!(stmt.sub_nodes.len(), 3);
    assert!(stmt.sub_nodes.iter().all(|n| n.kind != NodeKind::Default));
    Ok(())
}

#[test]
fn test_empty_switch() -> PseudoResult<()> {
    let stmt = statement(&["switch x:", "endswitch"])?;
    assert_eq!(stmt, Node::new(NodeKind::Switch, vec![id("x")]));
    Ok(())
}

#[test]
fn test_switch_errors() {
    assert_eq!(
        error_text(&["switch x:", "default:", "y = 1", "case 2:", "y = 2", "endswitch"]),
        "Syntax error: default must be the last clause of a switch"
    );
    assert_eq!(
        error_text(&["switch x:", "case 1:", "y = 1"]),
        "Syntax error: 'endswitch' expected"
    );
    assert_eq!(error_text(&["switch x:", "y = 1", "endswitch"]), "Syntax error: 'case' expected");
    assert_eq!(error_text(&["switch x", "endswitch"]), "Syntax error: ':' expected");
    assert_eq!(
        error_text(&["switch x:", "case y:", "endswitch"]),
        "Syntax error: literal expected"
    );
}

#[test]
fn test_print_statement() -> PseudoResult<()> {
    let stmt = statement(&["print(x, y, x + 2, x ^ 2 - 2, f(z.a[3]), b.l.y)"])?;
    assert_eq!(stmt.kind, NodeKind::Print);
    assert_eq!(stmt.sub_nodes.len(), 6);
    assert_eq!(stmt.sub_nodes[3], add(TokenKind::Minus, pow(id("x"), int(2)), int(2)));
    assert_eq!(
        stmt.sub_nodes[4],
        call(id("f"), vec![index(field(id("z"), "a"), vec![int(3)])])
    );
    assert_eq!(stmt.sub_nodes[5], field(field(id("b"), "l"), "y"));

    let empty = statement(&["print()"])?;
    assert_eq!(empty, Node::leaf(NodeKind::Print));
    Ok(())
}

#[test]
fn test_function_declaration() -> PseudoResult<()> {
    let stmt = statement(&["function sum(a, b, c)", "    return a + b + c", "endfunction"])?;
    let body = Node::block(vec![Node::new(
        NodeKind::Return,
        vec![add(TokenKind::Plus, add(TokenKind::Plus, id("a"), id("b")), id("c"))],
    )]);
    let params = Node::new(NodeKind::Params, vec![param("a", false), param("b", false), param("c", false)]);
    assert_eq!(
        stmt,
        Node::new(NodeKind::FunDecl { name: "sum".to_string() }, vec![params, body])
    );
    assert_eq!(stmt.name(), Some("sum"));
    Ok(())
}

#[test]
fn test_parameter_passing_modes() -> PseudoResult<()> {
    let stmt = statement(&["function f(a:byRef, b:byVal, c)", "endfunction"])?;
    assert_eq!(
        stmt.sub_nodes[0],
        Node::new(NodeKind::Params, vec![param("a", true), param("b", false), param("c", false)])
    );
    assert_eq!(
        error_text(&["function f(a:ref)", "endfunction"]),
        "Syntax error: 'byRef' or 'byVal' expected"
    );
    Ok(())
}

#[test]
fn test_function_with_long_block() -> PseudoResult<()> {
    let stmt = statement(&[
        "function f(a, b, c, d)",
        "    for i = 0 to a",
        "        if i == b then",
        "            break",
        "        endif",
        "    next i",
        "    a = a DIV b MOD c ^ d",
        "    return a",
        "endfunction",
    ])?;
    let body = &stmt.sub_nodes[1];
    assert_eq!(body.sub_nodes.len(), 3);
    assert_eq!(
        body.sub_nodes[1],
        assign(
            id("a"),
            mul(TokenKind::Mod, mul(TokenKind::Div, id("a"), id("b")), pow(id("c"), id("d")))
        )
    );
    let mut breaks = 0;
    stmt.walk(&mut |n| {
        if n.kind == NodeKind::GoToInstr(TokenKind::Break) {
            breaks += 1;
        }
    });
    assert_eq!(breaks, 1);
    Ok(())
}

#[test]
fn test_procedure_declaration() -> PseudoResult<()> {
    let stmt = statement(&[
        "procedure sum(a:byRef, b:byVal, c)",
        "    global result = a + b + c",
        "    return",
        "endprocedure",
    ])?;
    let total = add(TokenKind::Plus, add(TokenKind::Plus, id("a"), id("b")), id("c"));
    let body = Node::block(vec![
        Node::binary(NodeKind::Assign { is_global: true }, id("result"), total),
        Node::leaf(NodeKind::Return),
    ]);
    let params = Node::new(NodeKind::Params, vec![param("a", true), param("b", false), param("c", false)]);
    assert_eq!(
        stmt,
        Node::new(NodeKind::ProcDecl { name: "sum".to_string() }, vec![params, body])
    );
    Ok(())
}

#[test]
fn test_return_errors() {
    assert_eq!(
        error_text(&["procedure p()", "    return 1", "endprocedure"]),
        "Syntax error: procedure cannot return a value"
    );
    assert_eq!(
        error_text(&["return 3"]),
        "Syntax error: return outside of function or procedure"
    );
}

#[test]
fn test_bare_return_in_function() -> PseudoResult<()> {
    let stmt = statement(&["function f()", "    return", "endfunction"])?;
    assert_eq!(stmt.sub_nodes[1], Node::block(vec![Node::leaf(NodeKind::Return)]));
    Ok(())
}

#[test]
fn test_nested_declarations_are_rejected() {
    assert_eq!(
        error_text(&["function f()", "    function g()", "    endfunction", "endfunction"]),
        "Syntax error: nested subroutine declaration not allowed"
    );
    assert_eq!(
        error_text(&["if x then", "    procedure p()", "    endprocedure", "endif"]),
        "Syntax error: nested subroutine declaration not allowed"
    );
    assert_eq!(
        error_text(&["while x", "    class A", "    endclass", "endwhile"]),
        "Syntax error: nested class declaration not allowed"
    );
}

#[test]
fn test_call_statements() -> PseudoResult<()> {
    let stmts = statements(&["f()", "a.b.c.d()", "a.b.c.d(e, f[g], h)", "a.b(c, d).e.f(g, h[i])"])?;
    assert_eq!(stmts.len(), 4);
    assert!(stmts.iter().all(|s| s.kind == NodeKind::Call));
    assert_eq!(stmts[0], call(id("f"), vec![]));
    assert_eq!(
        stmts[2],
        call(
            field(field(field(id("a"), "b"), "c"), "d"),
            vec![id("e"), index(id("f"), vec![id("g")]), id("h")]
        )
    );
    assert_eq!(
        stmts[3],
        call(
            field(field(call(field(id("a"), "b"), vec![id("c"), id("d")]), "e"), "f"),
            vec![id("g"), index(id("h"), vec![id("i")])]
        )
    );
    Ok(())
}

#[test]
fn test_non_call_expression_statements_are_rejected() {
    assert_eq!(error_text(&["global f()"]), "Syntax error: '=' expected");
    assert_eq!(error_text(&["x.y"]), "Syntax error: '=' expected");
    assert_eq!(error_text(&["a[1]"]), "Syntax error: '=' expected");
}

#[test]
fn test_call_in_assignment() -> PseudoResult<()> {
    let stmt = statement(&["global y = obj1.obj2.f1(a, b).obj3.f2(c, d)"])?;
    let value = call(
        field(field(call(field(field(id("obj1"), "obj2"), "f1"), vec![id("a"), id("b")]), "obj3"), "f2"),
        vec![id("c"), id("d")],
    );
    assert_eq!(stmt, Node::binary(NodeKind::Assign { is_global: true }, id("y"), value));
    Ok(())
}

#[test]
fn test_builtin_function_calls() -> PseudoResult<()> {
    let stmt = statement(&["d = input(\"Enter a value here: \")"])?;
    assert_eq!(stmt, assign(id("d"), call(id("input"), vec![string("Enter a value here: ")])));

    let stmt = statement(&["print(x.y.z[0].s.substring(2, 0))"])?;
    let chain = call(
        field(field(index(field(field(id("x"), "y"), "z"), vec![int(0)]), "s"), "substring"),
        vec![int(2), int(0)],
    );
    assert_eq!(stmt, Node::new(NodeKind::Print, vec![chain]));
    Ok(())
}

#[test]
fn test_class_declaration() -> PseudoResult<()> {
    let stmt = statement(&[
        "class A",
        "    __val",
        "    procedure new(val)",
        "        __val = val",
        "    endprocedure",
        "endclass",
    ])?;
    let constructor = Node::new(
        NodeKind::ProcDecl { name: "new".to_string() },
        vec![
            Node::new(NodeKind::Params, vec![param("val", false)]),
            Node::block(vec![assign(id("__val"), id("val"))]),
        ],
    );
    let expected = Node::new(
        NodeKind::ClassDecl {
            name: "A".to_string(),
            parent: None,
        },
        vec![
            Node::new(NodeKind::ClassMember { is_public: false }, vec![id("__val")]),
            Node::new(NodeKind::ClassMember { is_public: false }, vec![constructor]),
        ],
    );
    assert_eq!(stmt, expected);
    Ok(())
}

#[test]
fn test_class_with_inheritance() -> PseudoResult<()> {
    let stmt = statement(&[
        "class B inherits A",
        "    private __val",
        "    public val",
        "    public procedure new(v)",
        "        super.new()",
        "        val = v",
        "    endprocedure",
        "    public function get()",
        "        return __val",
        "    endfunction",
        "endclass",
    ])?;
    assert_eq!(
        stmt.kind,
        NodeKind::ClassDecl {
            name: "B".to_string(),
            parent: Some("A".to_string()),
        }
    );
    let visibility: Vec<bool> = stmt
        .sub_nodes
        .iter()
        .map(|m| matches!(m.kind, NodeKind::ClassMember { is_public: true }))
        .collect();
    assert_eq!(visibility, vec![false, true, true, true]);

    let constructor_body = &stmt.sub_nodes[2].sub_nodes[0].sub_nodes[1];
    assert_eq!(
        constructor_body.sub_nodes[0],
        call(field(Node::leaf(NodeKind::Super), "new"), vec![])
    );
    assert_eq!(stmt.sub_nodes[3].sub_nodes[0].name(), Some("get"));
    Ok(())
}

#[test]
fn test_class_errors() {
    assert_eq!(error_text(&["class A", "    x"]), "Syntax error: 'endclass' expected");
    assert_eq!(
        error_text(&["class A", "    x = 1", "endclass"]),
        "Syntax error: class member expected"
    );
}

#[test]
fn test_class_instantiation() -> PseudoResult<()> {
    let stmt = statement(&["a = new A(\"a\" + \"b\", 3 ^ 2 DIV 6, 2 / 5)"])?;
    let instance = Node::new(
        NodeKind::New("A".to_string()),
        vec![args(vec![
            add(TokenKind::Plus, string("a"), string("b")),
            mul(TokenKind::Div, pow(int(3), int(2)), int(6)),
            mul(TokenKind::Divide, int(2), int(5)),
        ])],
    );
    assert_eq!(stmt, assign(id("a"), instance));
    Ok(())
}

#[test]
fn test_method_call_on_new_instance() -> PseudoResult<()> {
    let stmt = statement(&["new Counter(0).tick()"])?;
    let instance = Node::new(NodeKind::New("Counter".to_string()), vec![args(vec![int(0)])]);
    assert_eq!(stmt, call(field(instance, "tick"), vec![]));
    Ok(())
}

#[test]
fn test_instantiation_statement() -> PseudoResult<()> {
    let stmt = statement(&["new A(3)"])?;
    assert_eq!(stmt, Node::new(NodeKind::New("A".to_string()), vec![args(vec![int(3)])]));
    assert_eq!(error_text(&["global new A(3)"]), "Syntax error: '=' expected");
    Ok(())
}

#[test]
fn test_jump_statements_need_an_enclosing_loop() -> PseudoResult<()> {
    assert_eq!(error_text(&["break"]), "Syntax error: break outside of loop or switch");
    assert_eq!(error_text(&["continue"]), "Syntax error: continue outside of loop");
    assert_eq!(
        error_text(&["switch x:", "case 1:", "    continue", "endswitch"]),
        "Syntax error: continue outside of loop"
    );
    assert_eq!(
        error_text(&["function f()", "    if x then", "        break", "    endif", "endfunction"]),
        "Syntax error: break outside of loop or switch"
    );
    let err = parse(vec!["while x", "endwhile", "", "continue"]).unwrap_err();
    assert_eq!(err.line(), Some(4));

    let stmt = statement(&[
        "while x",
        "    switch y:",
        "        case 1:",
        "            continue",
        "    endswitch",
        "    if z then",
        "        break",
        "    endif",
        "endwhile",
    ])?;
    let mut jumps = 0;
    stmt.walk(&mut |n| {
        if matches!(n.kind, NodeKind::GoToInstr(_)) {
            jumps += 1;
        }
    });
    assert_eq!(jumps, 2);
    Ok(())
}

#[test]
fn test_unexpected_token() {
    let result = parse(vec!["x = 1", "endif"]);
    match result {
        Err(PseudoError::UnexpectedToken { token, line }) => {
            assert_eq!(token, "endif");
            assert_eq!(line, 2);
        }
        other => panic!("Expected UnexpectedToken, but got: {:?}", other),
    }
    assert_eq!(error_text(&["then"]), "Syntax error: unexpected token 'then'");
}

#[test]
fn test_error_line_numbers() {
    let err = parse(vec!["x = 1", "", "y = = 2"]).unwrap_err();
    assert_eq!(err.to_string(), "Syntax error: expression expected");
    assert_eq!(err.line(), Some(3));
    assert!(err.is_syntax_error());

    let err = parse(vec!["x = 1", "y = 2 $"]).unwrap_err();
    assert!(matches!(err, PseudoError::UnknownToken { line: 2, .. }));
}

#[test]
fn test_missing_closing_parenthesis() {
    assert_eq!(error_text(&["x = (1 + 2"]), "Syntax error: ')' expected");
    assert_eq!(error_text(&["print(1, 2"]), "Syntax error: ')' expected");
}

#[test]
fn test_multiple_statements_on_one_line() -> PseudoResult<()> {
    let stmts = statements(&["x = 1 y = 2"])?;
    assert_eq!(stmts, vec![assign(id("x"), int(1)), assign(id("y"), int(2))]);
    Ok(())
}

#[test]
fn test_comments_are_ignored() -> PseudoResult<()> {
    let stmts = statements(&["// setup", "x = 1 // one", "", "y = x // copy"])?;
    assert_eq!(stmts, vec![assign(id("x"), int(1)), assign(id("y"), id("x"))]);
    Ok(())
}

#[test]
fn test_parse_source_splits_lines() -> PseudoResult<()> {
    let ast = parse_source("x = 1\nwhile x < 10\n    x = x * 2\nendwhile\n")?.expect("program");
    assert_eq!(ast.sub_nodes.len(), 2);
    assert_eq!(ast.sub_nodes[1].kind, NodeKind::While);
    Ok(())
}

#[test]
fn test_node_count_and_tree_dump() -> PseudoResult<()> {
    let ast = parse(vec!["x = 3 + 4"])?.expect("program");
    // Program, Assign, Identifier, AddOp, IntLiteral, IntLiteral
    assert_eq!(ast.count(), 6);

    let dump = ast.to_string();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines[0], "Program");
    assert_eq!(lines[1], "  Assign is_global=false");
    assert_eq!(lines[2], "    Identifier x");
    assert_eq!(lines[3], "    AddOp +");
    Ok(())
}

#[test]
fn test_array_dimensions_are_walked() -> PseudoResult<()> {
    let ast = parse(vec!["array grid[w, h + 1]"])?.expect("program");
    let mut names = Vec::new();
    ast.walk(&mut |n| {
        if let NodeKind::Identifier(name) = &n.kind {
            names.push(name.clone());
        }
    });
    assert_eq!(names, vec!["w".to_string(), "h".to_string()]);
    Ok(())
}
