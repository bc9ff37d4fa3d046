use std::io::{BufRead, Write};

use anyhow::Result;

use crate::{
    console::Tokens,
    set_algebra::{
        ops::{difference, intersection, union},
        set::Set,
    },
};

const INITIAL_A: [i64; 11] = [4, 3, 5, 3, 18, 7, 18, 4, 2, 2, 6];
const INITIAL_D: [i64; 7] = [11, 18, 7, 7, 5, 1, 2];

/// Read set A interactively, then print sets A to D and every union,
/// intersection and difference of the pairs A/A, A/D, A/B and B/C.
pub fn run<R: BufRead, W: Write>(tokens: &mut Tokens<R>, out: &mut W) -> Result<()> {
    let mut a = Set::from_values(&INITIAL_A);
    let b = Set::new();
    let c = Set::new();
    let d = Set::from_values(&INITIAL_D);

    write!(out, "For Set A: ")?;
    a.input(tokens, out)?;

    write!(out, "\nHere are sets A, B, C, and D:\n")?;
    for (name, set) in [("A", &a), ("B", &b), ("C", &c), ("D", &d)] {
        write!(out, "\nSet {}: {}", name, set)?;
    }

    let pairs = [("A", &a, "A", &a), ("A", &a, "D", &d), ("A", &a, "B", &b), ("B", &b, "C", &c)];
    let operations: [(&str, fn(&Set, &Set) -> Set); 3] = [
        ("union", union),
        ("intersect", intersection),
        ("-", difference),
    ];
    for (op_name, op) in operations {
        writeln!(out)?;
        for (left_name, left, right_name, right) in pairs {
            write!(out, "\n{} {} {} = {}", left_name, op_name, right_name, op(left, right))?;
        }
    }

    write!(out, "\n\nEnter any letter to end the program.\n")?;
    out.flush()?;
    tokens.next_token()?;
    Ok(())
}

#[cfg(test)]
mod demo_tests {
    use std::io::Cursor;

    use super::*;

    fn run_demo(input: &str) -> String {
        let mut tokens = Tokens::new(Cursor::new(input.to_string()));
        let mut out = vec![];
        run(&mut tokens, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_demo_transcript() {
        let output = run_demo("11\n4 3 5 3 18 7 18 4 2 2 6\nq\n");
        let expected = "For Set A: Enter the number of elements of the set:\n\
Enter the (integer) elements, separated by spaces or carriage returns:\n\
\nHere are sets A, B, C, and D:\n\
\nSet A: {4, 3, 5, 18, 7, 2, 6}\
\nSet B: {Empty Set}\
\nSet C: {Empty Set}\
\nSet D: {11, 18, 7, 5, 1, 2}\n\
\nA union A = {4, 3, 5, 18, 7, 2, 6}\
\nA union D = {4, 3, 5, 18, 7, 2, 6, 11, 1}\
\nA union B = {4, 3, 5, 18, 7, 2, 6}\
\nB union C = {Empty Set}\n\
\nA intersect A = {4, 3, 5, 18, 7, 2, 6}\
\nA intersect D = {5, 18, 7, 2}\
\nA intersect B = {Empty Set}\
\nB intersect C = {Empty Set}\n\
\nA - A = {Empty Set}\
\nA - D = {4, 3, 6}\
\nA - B = {4, 3, 5, 18, 7, 2, 6}\
\nB - C = {Empty Set}\n\
\nEnter any letter to end the program.\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_demo_uses_input_for_a() {
        let output = run_demo("2 1 1");
        assert!(output.contains("\nSet A: {1}"));
        assert!(output.contains("\nA - D = {Empty Set}"));
        assert!(output.ends_with("Enter any letter to end the program.\n"));
    }

    #[test]
    fn test_demo_fails_on_bad_input() {
        let mut tokens = Tokens::new(Cursor::new("x".to_string()));
        let mut out = vec![];
        assert!(run(&mut tokens, &mut out).is_err());
    }
}
