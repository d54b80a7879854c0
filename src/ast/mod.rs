// Syntax tree of the pseudocode language.
//
// program     = { statement } ;
// statement   = [ "global" ] "array" ident "[" exprs "]"
//             | [ "global" ] chain "=" expr
//             | chain                                   (ending in a call, or a bare "new")
//             | "if" expr "then" block { "elseif" expr "then" block } [ "else" block ] "endif"
//             | "for" ident "=" expr "to" expr block "next" ident
//             | "while" expr block "endwhile"
//             | "do" block "until" expr
//             | "switch" expr ":" { "case" literal ":" block } [ "default" ":" block ] "endswitch"
//             | "function" ident "(" params ")" block "endfunction"
//             | "procedure" ident "(" params ")" block "endprocedure"
//             | "class" ident [ "inherits" ident ] { member } "endclass"
//             | "print" "(" exprs ")" | "break" | "continue" | "return" [ expr ] ;
// chain       = ( ident | "super" | "new" ident "(" exprs ")" ) { "." ident | "[" exprs "]" | "(" exprs ")" } ;
// expr        = or ;   or = and { "OR" and } ;   and = not { "AND" not } ;
// not         = "NOT" not | cmp ;   cmp = add { cmpop add } ;
// add         = mul { ( "+" | "-" ) mul } ;   mul = pow { ( "*" | "/" | "DIV" | "MOD" ) pow } ;
// pow         = unary [ "^" pow ] ;   unary = "-" unary | primary ;

mod display;
mod node;

pub use node::{Node, NodeKind};
