/// Count lines holding at least one non-whitespace character.
pub fn count_lines(text: &str) -> usize {
    text.lines()
        .filter(|line| line.chars().any(|c| !c.is_whitespace()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("def foo():\n    pass\n"), 2);
        assert_eq!(count_lines("a\n\n   \n\t\nb"), 2);
        assert_eq!(count_lines("a\r\nb\r\n"), 2);
    }
}
