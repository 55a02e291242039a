//! Schema script parsing.
//!
//! Splits a SQL script into individual statements so runs can report how
//! many statements a script carries and whether it is empty. The whole raw
//! script is still executed as one batch; the split is informational only.

/// A parsed schema script.
#[derive(Debug, Clone)]
pub struct SchemaScript {
    statements: Vec<String>,
}

/// Scanner state while walking the raw script.
enum ScanState {
    Normal,
    SingleQuote,
    DoubleQuote,
    LineComment,
    BlockComment,
}

impl SchemaScript {
    /// Parses a raw script into statements.
    ///
    /// Statements are separated by `;` outside of quoted strings. `--` line
    /// comments and `/* */` block comments are stripped, so a script made of
    /// comments only parses as empty.
    pub fn parse(raw: &str) -> Self {
        let mut statements = Vec::new();
        let mut current = String::new();
        let mut state = ScanState::Normal;
        let mut chars = raw.chars().peekable();

        while let Some(c) = chars.next() {
            match state {
                ScanState::Normal => match c {
                    ';' => {
                        let stmt = current.trim();
                        if !stmt.is_empty() {
                            statements.push(stmt.to_string());
                        }
                        current.clear();
                    }
                    '\'' => {
                        state = ScanState::SingleQuote;
                        current.push(c);
                    }
                    '"' => {
                        state = ScanState::DoubleQuote;
                        current.push(c);
                    }
                    '-' if chars.peek() == Some(&'-') => {
                        chars.next();
                        state = ScanState::LineComment;
                    }
                    '/' if chars.peek() == Some(&'*') => {
                        chars.next();
                        state = ScanState::BlockComment;
                    }
                    _ => current.push(c),
                },
                ScanState::SingleQuote => {
                    current.push(c);
                    if c == '\'' {
                        state = ScanState::Normal;
                    }
                }
                ScanState::DoubleQuote => {
                    current.push(c);
                    if c == '"' {
                        state = ScanState::Normal;
                    }
                }
                ScanState::LineComment => {
                    if c == '\n' {
                        state = ScanState::Normal;
                        current.push(c);
                    }
                }
                ScanState::BlockComment => {
                    if c == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        state = ScanState::Normal;
                    }
                }
            }
        }

        let stmt = current.trim();
        if !stmt.is_empty() {
            statements.push(stmt.to_string());
        }

        Self { statements }
    }

    /// Returns the individual statements of the script.
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Returns the number of statements in the script.
    pub fn statement_count(&self) -> usize {
        self.statements.len()
    }

    /// Returns true if the script contains no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_semicolons() {
        let script = SchemaScript::parse("CREATE TABLE a (id INT); CREATE TABLE b (id INT);");
        assert_eq!(script.statement_count(), 2);
        assert_eq!(script.statements()[0], "CREATE TABLE a (id INT)");
    }

    #[test]
    fn test_trailing_statement_without_semicolon() {
        let script = SchemaScript::parse("CREATE TABLE a (id INT)");
        assert_eq!(script.statement_count(), 1);
    }

    #[test]
    fn test_semicolon_inside_string_literal() {
        let script = SchemaScript::parse("INSERT INTO t (v) VALUES ('a;b'); SELECT 1;");
        assert_eq!(script.statement_count(), 2);
        assert_eq!(script.statements()[0], "INSERT INTO t (v) VALUES ('a;b')");
    }

    #[test]
    fn test_semicolon_inside_quoted_identifier() {
        let script = SchemaScript::parse("CREATE TABLE \"weird;name\" (id INT);");
        assert_eq!(script.statement_count(), 1);
    }

    #[test]
    fn test_line_comments_are_stripped() {
        let script = SchemaScript::parse("-- a comment; not a statement\nSELECT 1;");
        assert_eq!(script.statement_count(), 1);
        assert_eq!(script.statements()[0], "SELECT 1");
    }

    #[test]
    fn test_block_comments_are_stripped() {
        let script = SchemaScript::parse("/* setup; stuff */ CREATE TABLE a (id INT);");
        assert_eq!(script.statement_count(), 1);
        assert_eq!(script.statements()[0], "CREATE TABLE a (id INT)");
    }

    #[test]
    fn test_comment_only_script_is_empty() {
        let script = SchemaScript::parse("-- nothing here\n/* nor here */");
        assert!(script.is_empty());
        assert_eq!(script.statement_count(), 0);
    }

    #[test]
    fn test_empty_script() {
        assert!(SchemaScript::parse("").is_empty());
        assert!(SchemaScript::parse("  \n ; ; \n").is_empty());
    }
}
