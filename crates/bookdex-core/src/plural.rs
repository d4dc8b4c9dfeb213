/// Pick the Russian plural form of a counting word for `n`.
///
/// `one` covers 1, 21, 31, ...; `few` covers 2-4, 22-24, ...; `many` covers
/// everything else, including the teens 11-14.
pub fn plural_form<'a>(n: usize, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    if n % 10 == 1 && n % 100 != 11 {
        one
    } else if (2..=4).contains(&(n % 10)) && !(10..=19).contains(&(n % 100)) {
        few
    } else {
        many
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raz(n: usize) -> &'static str {
        plural_form(n, "раз", "раза", "раз")
    }

    #[test]
    fn test_singular_form() {
        assert_eq!(raz(1), "раз");
        assert_eq!(raz(21), "раз");
        assert_eq!(raz(101), "раз");
    }

    #[test]
    fn test_few_form() {
        assert_eq!(raz(2), "раза");
        assert_eq!(raz(3), "раза");
        assert_eq!(raz(4), "раза");
        assert_eq!(raz(22), "раза");
        assert_eq!(raz(104), "раза");
    }

    #[test]
    fn test_many_form() {
        assert_eq!(raz(0), "раз");
        assert_eq!(raz(5), "раз");
        assert_eq!(raz(11), "раз");
        assert_eq!(raz(12), "раз");
        assert_eq!(raz(14), "раз");
        assert_eq!(raz(114), "раз");
        assert_eq!(raz(25), "раз");
    }
}
