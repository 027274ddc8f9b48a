pub type PaintOutput = Vec<Vec<char>>;

pub trait Painter {
    fn paint(&self) -> PaintOutput;
}

/// Wraps every row and the whole block in a one-glyph border.
pub fn frame(content: PaintOutput, border: char) -> PaintOutput {
    let inner_width = content.first().map_or(0, Vec::len);
    let edge: Vec<char> = vec![border; inner_width + 2];

    let mut output: PaintOutput = Vec::with_capacity(content.len() + 2);
    output.push(edge.clone());
    for row in content {
        let mut line: Vec<char> = Vec::with_capacity(inner_width + 2);
        line.push(border);
        line.extend(row);
        line.push(border);
        output.push(line);
    }
    output.push(edge);
    output
}

pub fn to_text(output: &PaintOutput) -> String {
    output
        .iter()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}
