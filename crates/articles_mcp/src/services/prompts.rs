/// Build the instruction text for the list_articles prompt.
///
/// The wording is for a model to read; nothing should parse it.
pub fn list_articles_prompt(number: i64, condition: &str) -> String {
    let condition = condition.trim();
    let mut prompt_text = format!("List {} alayman's articles", number);
    if !condition.is_empty() {
        prompt_text.push_str(&format!(" {}", condition));
    }

    prompt_text.push_str(&format!(
        "\n\nPlease use the get_articles tool to fetch the articles. Set the limit parameter to {}.",
        number
    ));

    if !condition.is_empty() {
        prompt_text.push_str(&format!(
            "\n\nApply the following condition when presenting the results: {}",
            condition
        ));
    }

    prompt_text.push_str("\n\nDisplay the results in a clear, readable format including the article title, author, publication time, and URL.");

    prompt_text
}
