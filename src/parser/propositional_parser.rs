use pest::error::Error;
use pest::iterators::Pair;
use pest::Parser;

use crate::formulas::{Formula, FormulaFactory, ToFormula};

#[derive(Parser)]
#[grammar = "parser/propositional.pest"]
struct PropositionalParser;

/// Parses a propositional formula from a string.
///
/// The syntax is `~` for negation, `&` for conjunction, `|` for disjunction,
/// `=>` for implication, and `<=>` for equivalence, with that precedence
/// order (strongest first). `=>` and `<=>` associate to the right. Variable
/// names consist of ASCII letters, digits, and underscores.
pub fn parse<I: AsRef<str>>(f: &FormulaFactory, input: I) -> Result<Formula, Box<Error<Rule>>> {
    let parsed = PropositionalParser::parse(Rule::formula, input.as_ref())?.next().unwrap();

    let mut formula = None;

    for x in parsed.into_inner() {
        match x.as_rule() {
            Rule::equivalence => {
                formula = Some(parse_equivalence(f, x));
            }
            Rule::EOI => (),
            _ => unreachable!(),
        }
    }

    Ok(formula.unwrap())
}

fn parse_equivalence(f: &FormulaFactory, equivalence: Pair<Rule>) -> Formula {
    let mut implications = equivalence.into_inner().rev();
    let mut form = parse_implication(f, implications.next().unwrap());

    for implication in implications {
        let form_left = parse_implication(f, implication);
        form = f.equivalence(form_left, form);
    }
    form
}

fn parse_implication(f: &FormulaFactory, implication: Pair<Rule>) -> Formula {
    let mut disjunctions = implication.into_inner().rev();
    let mut form = parse_disjunction(f, disjunctions.next().unwrap());

    for disjunction in disjunctions {
        let form_left = parse_disjunction(f, disjunction);
        form = f.implication(form_left, form);
    }
    form
}

fn parse_disjunction(f: &FormulaFactory, disjunction: Pair<Rule>) -> Formula {
    let conjunctions = disjunction.into_inner();
    let mut conjs = Vec::default();

    for conjunction in conjunctions {
        conjs.push(parse_conjunction(f, conjunction));
    }

    if conjs.len() > 1 {
        f.or(&conjs)
    } else {
        conjs.pop().unwrap()
    }
}

fn parse_conjunction(f: &FormulaFactory, conjunction: Pair<Rule>) -> Formula {
    let simps = conjunction.into_inner();
    let mut ops = Vec::default();

    for simp in simps {
        ops.push(parse_simp(f, simp));
    }

    if ops.len() > 1 {
        f.and(&ops)
    } else {
        ops.pop().unwrap()
    }
}

fn parse_simp(f: &FormulaFactory, simp: Pair<Rule>) -> Formula {
    let mut tokens = simp.into_inner();
    let mut phase = true;
    let mut x = tokens.next().unwrap();
    while x.as_rule() == Rule::not {
        phase = !phase;
        x = tokens.next().unwrap();
    }

    let mut form = match x.as_rule() {
        Rule::literal => f.variable(x.as_str()),
        Rule::equivalence => parse_equivalence(f, x),
        _ => unreachable!(),
    };

    if !phase {
        form = f.not(form);
    }
    form
}

impl ToFormula for str {
    /// # Panics
    ///
    /// Panics if the string is not a well-formed formula. Use [`parse`] for
    /// fallible parsing.
    fn to_formula(&self, f: &FormulaFactory) -> Formula {
        parse(f, self).expect("invalid formula string")
    }
}

impl ToFormula for String {
    /// # Panics
    ///
    /// Panics if the string is not a well-formed formula. Use [`parse`] for
    /// fallible parsing.
    fn to_formula(&self, f: &FormulaFactory) -> Formula {
        parse(f, self).expect("invalid formula string")
    }
}
