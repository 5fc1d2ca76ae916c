/// The fixed, ordered list of demo targets.
///
/// Every run mode consumes this same list; order matters because the
/// sequential modes report results in list order.
pub fn default_targets() -> Vec<String> {
    [
        "https://www.google.com",
        "https://www.microsoft.com",
        "https://www.cnn.com",
        "https://www.amazon.com",
        "https://www.facebook.com",
        "https://www.twitter.com",
        "https://www.codeproject.com",
        "https://www.stackoverflow.com",
        "https://en.wikipedia.org/wiki/.NET_Framework",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
