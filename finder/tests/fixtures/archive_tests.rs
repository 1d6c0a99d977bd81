#[cfg(test)]
mod tests {
    #[test]
    fn parses_header() {
        assert_eq!(1 + 1, 2);
    }

    #[test]
    #[ignore]
    fn parses_large_archive() {
        assert_eq!(1, 2);
    }

    #[test]
    #[ignore = "needs network access"]
    fn downloads_index() {}
}
