use abacus::calculate;
use abacus::calculator::{DisplayResult, Operator, Token, evaluate, tokenize};
use abacus::config::Config;

/// Small deterministic generator so failures are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

/// Evaluate with precedence by folding each run of `*`/`/` into a term.
fn reference(numbers: &[f64], ops: &[char]) -> f64 {
    let mut terms = vec![numbers[0]];
    let mut signs = vec![1.0];

    for (op, &n) in ops.iter().zip(&numbers[1..]) {
        match op {
            '*' => *terms.last_mut().unwrap() *= n,
            '/' => *terms.last_mut().unwrap() /= n,
            '+' => {
                terms.push(n);
                signs.push(1.0);
            }
            '-' => {
                terms.push(n);
                signs.push(-1.0);
            }
            _ => unreachable!(),
        }
    }

    terms.iter().zip(&signs).map(|(t, s)| t * s).sum()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn matches_reference_evaluator() {
    let mut rng = Lcg(42);

    for _ in 0..500 {
        let len = 1 + rng.below(7) as usize;
        let mut numbers = Vec::new();
        let mut ops = Vec::new();
        let mut text = String::new();

        for i in 0..len {
            if i > 0 {
                let op = ['+', '-', '*', '/'][rng.below(4) as usize];
                ops.push(op);
                text.push(op);
            }
            let mut n = (1 + rng.below(99)) as f64;
            if rng.below(4) == 0 {
                n += 0.5;
            }
            if rng.below(5) == 0 {
                n = -n;
            }
            numbers.push(n);
            text.push_str(&n.to_string());
        }

        let expected = reference(&numbers, &ops);
        match evaluate(&text) {
            DisplayResult::Value(actual) => assert!(
                close(actual, expected),
                "{text}: got {actual}, expected {expected}"
            ),
            DisplayResult::Error(e) => panic!("{text}: unexpected error {e}"),
        }
    }
}

#[test]
fn documented_examples() {
    assert_eq!(evaluate("2+3"), DisplayResult::Value(5.0));
    assert_eq!(evaluate("2+3*4"), DisplayResult::Value(14.0));
    assert_eq!(evaluate("10/2*5"), DisplayResult::Value(25.0));
    assert_eq!(
        evaluate("5/0"),
        DisplayResult::Error("Error: Division by zero".to_string())
    );
    assert_eq!(
        evaluate(""),
        DisplayResult::Error("Error: Empty Expression".to_string())
    );
    assert!(evaluate("*2+3").error().unwrap().starts_with("Error: "));
    assert_eq!(evaluate("5*-2"), DisplayResult::Value(-10.0));
    assert_eq!(evaluate("-2*-3"), DisplayResult::Value(6.0));
    assert_eq!(evaluate("5--2"), DisplayResult::Value(7.0));
    assert_eq!(
        evaluate("5+"),
        DisplayResult::Error("Error: Invalid addition format".to_string())
    );
    assert_eq!(
        evaluate("5*-"),
        DisplayResult::Error("Error: could not convert string to float: '-'".to_string())
    );
}

#[test]
fn tokenize_boundary_literals() {
    assert_eq!(
        tokenize("3+2.").unwrap(),
        vec![
            Token::Number(3.0),
            Token::Operator(Operator::Add),
            Token::Number(2.0)
        ]
    );
    assert_eq!(
        tokenize(".2+3").unwrap(),
        vec![
            Token::Number(0.2),
            Token::Operator(Operator::Add),
            Token::Number(3.0)
        ]
    );
}

#[test]
fn calculate_normalises_typed_input() {
    let config = Config::default();

    let item = calculate(" 6 × 7 ", &config);
    assert_eq!(item.expression, "6*7");
    assert_eq!(item.display_result, "42");

    let item = calculate("1 ÷ 3", &config);
    assert_eq!(item.display_result, "0.3333333333");
    assert_eq!(item.text_for_clipboard(), "0.3333333333");
}

#[test]
fn calculate_without_normalisation_rejects_spaces() {
    let config = Config::from_toml("[input]\nstrip_whitespace = false").unwrap();
    let item = calculate("2 + 3", &config);
    assert!(item.is_error);
    assert_eq!(
        item.display_result,
        "Error: Invalid character in expression:  "
    );
}
