/// Collapse runs of newlines in a generated message.
///
/// Models tend to pad their answers with blank lines. Split the message
/// into lines, drop the blank ones, and join what remains with `delimiter`
/// (a single newline when not given). The result never contains a run of
/// more than one newline.
pub fn trim_new_lines(message: &str, delimiter: Option<&str>) -> String {
    let delimiter = delimiter.unwrap_or("\n");

    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(delimiter)
}
