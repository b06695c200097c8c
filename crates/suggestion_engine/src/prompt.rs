/// Builds the single-turn instruction sent to the completion service.
///
/// Tags appear in the given order, comma-separated. The reply contract is a
/// JSON object with a `youtube` and a `reddit` array of `{name, url}` entries.
pub fn build_instruction<S: AsRef<str>>(tags: &[S]) -> String {
    let joined = tags
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Based on the following interests: {joined},\n\
         suggest five to ten YouTube channels and five to ten Reddit subreddits that align with these interests.\n\
         Return the response in JSON format with two arrays: \"youtube\" and \"reddit\".\n\
         Each item should have a \"name\" and a \"url\" field."
    )
}
