//! Backus-Naur Form, described in its own notation:
//!
//! ```text
//! <syntax>         ::= <rule> | <rule> <syntax>
//! <rule>           ::= <opt-whitespace> "<" <rule-name> ">" <opt-whitespace>
//!                      "::=" <opt-whitespace> <expression> <line-end>
//! <opt-whitespace> ::= " " <opt-whitespace> | ""
//! <expression>     ::= <list> | <list> <opt-whitespace> "|" <opt-whitespace> <expression>
//! <line-end>       ::= <opt-whitespace> <EOL> | <line-end> <line-end>
//! <list>           ::= <term> | <term> <opt-whitespace> <list>
//! <term>           ::= <literal> | "<" <rule-name> ">"
//! <literal>        ::= '"' <text1> '"' | "'" <text2> "'"
//! <text1>          ::= "" | <character1> <text1>
//! <text2>          ::= "" | <character2> <text2>
//! <character>      ::= <letter> | <digit> | <symbol>
//! <character1>     ::= <character> | "'"
//! <character2>     ::= <character> | '"'
//! <rule-name>      ::= <letter> | <rule-name> <rule-char>
//! <rule-char>      ::= <letter> | <digit> | "-"
//! ```
//!
//! Two rules need care. `<rule-name>` is left-recursive and is encoded with
//! [`left_recursion`], so a name parses as a flat run of characters instead
//! of recursing without bound. `<opt-whitespace>`, `<line-end>`, `<text1>`
//! and `<text2>` are repetitions and are encoded with [`repeat`] rather than
//! right recursion, which keeps runs of spaces, newlines and text characters
//! flat too. The `"::="` operator is matched as one three-character literal.

use crate::combinator::{
    concat, left_recursion, literal, literal_choice, or, repeat, ParseOutcome,
    Parser, RepeatMinimum,
};
use crate::error::ParseError;
use crate::token::{TokenNode, TokenType};

const LETTERS: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O",
    "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "a", "b", "c", "d",
    "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z",
];

const DIGITS: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

const SYMBOLS: &[&str] = &[
    "|", " ", "!", "#", "$", "%", "&", "(", ")", "*", "+", ",", "-", ".", "/",
    ":", ";", ">", "=", "<", "?", "@", "[", "\\", "]", "^", "_", "`", "{", "}",
    "~",
];

/// Rule identifiers of the BNF grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    Syntax,
    Rule,
    OptWhitespace,
    Expression,
    LineEnd,
    List,
    Term,
    Literal,
    Text1,
    Text2,
    Character,
    Letter,
    Digit,
    Symbol,
    Character1,
    Character2,
    RuleName,
    RuleChar,
}

impl RuleName {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Rule => "rule",
            Self::OptWhitespace => "opt-whitespace",
            Self::Expression => "expression",
            Self::LineEnd => "line-end",
            Self::List => "list",
            Self::Term => "term",
            Self::Literal => "literal",
            Self::Text1 => "text1",
            Self::Text2 => "text2",
            Self::Character => "character",
            Self::Letter => "letter",
            Self::Digit => "digit",
            Self::Symbol => "symbol",
            Self::Character1 => "character1",
            Self::Character2 => "character2",
            Self::RuleName => "rule-name",
            Self::RuleChar => "rule-char",
        }
    }

    #[must_use]
    pub fn token_type(self) -> TokenType {
        TokenType::rule(self.name())
    }
}

/// `<syntax> ::= <rule> | <rule> <syntax>`
fn syntax(text: &str, position: usize) -> ParseOutcome {
    or(
        RuleName::Syntax.token_type(),
        vec![
            Parser::from_fn(rule),
            concat(
                TokenType::Temp,
                vec![Parser::from_fn(rule), Parser::from_fn(syntax)],
            ),
        ],
    )
    .run(text, position)
}

/// `<rule> ::= <opt-whitespace> "<" <rule-name> ">" <opt-whitespace> "::="
/// <opt-whitespace> <expression> <line-end>`
fn rule(text: &str, position: usize) -> ParseOutcome {
    concat(
        RuleName::Rule.token_type(),
        vec![
            Parser::from_fn(opt_whitespace),
            literal("<"),
            Parser::from_fn(rule_name),
            literal(">"),
            Parser::from_fn(opt_whitespace),
            literal("::="),
            Parser::from_fn(opt_whitespace),
            Parser::from_fn(expression),
            Parser::from_fn(line_end),
        ],
    )
    .run(text, position)
}

/// `<opt-whitespace> ::= " " <opt-whitespace> | ""`
fn opt_whitespace(text: &str, position: usize) -> ParseOutcome {
    repeat(
        RuleName::OptWhitespace.token_type(),
        literal(" "),
        RepeatMinimum::Zero,
    )
    .run(text, position)
}

/// `<expression> ::= <list> | <list> <opt-whitespace> "|" <opt-whitespace> <expression>`
fn expression(text: &str, position: usize) -> ParseOutcome {
    or(
        RuleName::Expression.token_type(),
        vec![
            Parser::from_fn(list),
            concat(
                TokenType::Temp,
                vec![
                    Parser::from_fn(list),
                    Parser::from_fn(opt_whitespace),
                    literal("|"),
                    Parser::from_fn(opt_whitespace),
                    Parser::from_fn(expression),
                ],
            ),
        ],
    )
    .run(text, position)
}

/// `<line-end> ::= <opt-whitespace> <EOL> | <line-end> <line-end>`
fn line_end(text: &str, position: usize) -> ParseOutcome {
    repeat(
        RuleName::LineEnd.token_type(),
        concat(
            TokenType::Temp,
            vec![Parser::from_fn(opt_whitespace), literal("\n")],
        ),
        RepeatMinimum::One,
    )
    .run(text, position)
}

/// `<list> ::= <term> | <term> <opt-whitespace> <list>`
fn list(text: &str, position: usize) -> ParseOutcome {
    or(
        RuleName::List.token_type(),
        vec![
            Parser::from_fn(term),
            concat(
                TokenType::Temp,
                vec![
                    Parser::from_fn(term),
                    Parser::from_fn(opt_whitespace),
                    Parser::from_fn(list),
                ],
            ),
        ],
    )
    .run(text, position)
}

/// `<term> ::= <literal> | "<" <rule-name> ">"`
fn term(text: &str, position: usize) -> ParseOutcome {
    or(
        RuleName::Term.token_type(),
        vec![
            Parser::from_fn(literal_text),
            concat(
                TokenType::Temp,
                vec![literal("<"), Parser::from_fn(rule_name), literal(">")],
            ),
        ],
    )
    .run(text, position)
}

/// `<literal> ::= '"' <text1> '"' | "'" <text2> "'"`
fn literal_text(text: &str, position: usize) -> ParseOutcome {
    or(
        RuleName::Literal.token_type(),
        vec![
            concat(
                TokenType::Temp,
                vec![literal("\""), Parser::from_fn(text1), literal("\"")],
            ),
            concat(
                TokenType::Temp,
                vec![literal("'"), Parser::from_fn(text2), literal("'")],
            ),
        ],
    )
    .run(text, position)
}

/// `<text1> ::= "" | <character1> <text1>`
fn text1(text: &str, position: usize) -> ParseOutcome {
    repeat(
        RuleName::Text1.token_type(),
        Parser::from_fn(character1),
        RepeatMinimum::Zero,
    )
    .run(text, position)
}

/// `<text2> ::= "" | <character2> <text2>`
fn text2(text: &str, position: usize) -> ParseOutcome {
    repeat(
        RuleName::Text2.token_type(),
        Parser::from_fn(character2),
        RepeatMinimum::Zero,
    )
    .run(text, position)
}

/// `<character> ::= <letter> | <digit> | <symbol>`
fn character(text: &str, position: usize) -> ParseOutcome {
    or(
        RuleName::Character.token_type(),
        vec![
            Parser::from_fn(letter),
            Parser::from_fn(digit),
            Parser::from_fn(symbol),
        ],
    )
    .run(text, position)
}

/// `<letter> ::= "A" | ... | "Z" | "a" | ... | "z"`
fn letter(text: &str, position: usize) -> ParseOutcome {
    literal_choice(RuleName::Letter.token_type(), LETTERS).run(text, position)
}

/// `<digit> ::= "0" | ... | "9"`
fn digit(text: &str, position: usize) -> ParseOutcome {
    literal_choice(RuleName::Digit.token_type(), DIGITS).run(text, position)
}

/// `<symbol> ::= "|" | " " | "!" | ...`
fn symbol(text: &str, position: usize) -> ParseOutcome {
    literal_choice(RuleName::Symbol.token_type(), SYMBOLS).run(text, position)
}

/// `<character1> ::= <character> | "'"`
fn character1(text: &str, position: usize) -> ParseOutcome {
    or(
        RuleName::Character1.token_type(),
        vec![Parser::from_fn(character), literal("'")],
    )
    .run(text, position)
}

/// `<character2> ::= <character> | '"'`
fn character2(text: &str, position: usize) -> ParseOutcome {
    or(
        RuleName::Character2.token_type(),
        vec![Parser::from_fn(character), literal("\"")],
    )
    .run(text, position)
}

/// `<rule-name> ::= <letter> | <rule-name> <rule-char>`
fn rule_name(text: &str, position: usize) -> ParseOutcome {
    left_recursion(
        RuleName::RuleName.token_type(),
        Parser::from_fn(letter),
        Parser::from_fn(rule_char),
    )
    .run(text, position)
}

/// `<rule-char> ::= <letter> | <digit> | "-"`
fn rule_char(text: &str, position: usize) -> ParseOutcome {
    or(
        RuleName::RuleChar.token_type(),
        vec![
            Parser::from_fn(letter),
            Parser::from_fn(digit),
            literal("-"),
        ],
    )
    .run(text, position)
}

/// The grammar's start rule as a parser.
#[must_use]
pub fn entry() -> Parser {
    Parser::from_fn(syntax)
}

/// Parse a whole input as a BNF syntax (one or more rules, each ended by a
/// newline).
pub fn parse(text: &str) -> Result<TokenNode, ParseError> {
    crate::parser::parse(&entry(), text)
}
