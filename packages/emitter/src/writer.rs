const INDENT: &str = "\t";

/// Indent-tracking text buffer for generated definitions.
///
/// `build` closes any scopes still open, so a partially-written
/// definition always produces balanced output.
#[derive(Debug, Default)]
pub struct SourceWriter {
    buffer: String,
    open_scopes: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, line: &str) -> &mut Self {
        for _ in 0..self.open_scopes {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
        self
    }

    pub fn add_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn open_scope(&mut self) -> &mut Self {
        self.add_line("{");
        self.open_scopes += 1;
        self
    }

    pub fn close_scope(&mut self) -> &mut Self {
        if self.open_scopes > 0 {
            self.open_scopes -= 1;
        }
        self.add_line("}");
        self
    }

    pub fn build(mut self) -> String {
        while self.open_scopes > 0 {
            self.close_scope();
        }
        self.buffer
    }
}
