//! The single form page.
//!
//! One inline template; no templating engine. The page re-renders with either
//! a result line or a validation message, never both.

use cambio_core::currency::Currency;

/// Renders the conversion form page.
#[must_use]
pub fn render(result: Option<&str>, error: Option<&str>) -> String {
    let message = match (result, error) {
        (Some(result), _) => format!("<p class=\"result\">{result}</p>"),
        (None, Some(error)) => format!("<p class=\"error\">{error}</p>"),
        (None, None) => String::new(),
    };

    let options: String = Currency::ALL
        .iter()
        .map(|c| format!("<option value=\"{c}\">{c}</option>"))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Currency Converter</title>
  <style>
    body {{ font-family: sans-serif; max-width: 28rem; margin: 4rem auto; }}
    .result {{ color: #2d7d46; }}
    .error {{ color: #b33a3a; }}
  </style>
</head>
<body>
  <h1>Currency Converter</h1>
  <form method="post" action="/">
    <label for="amount">Amount (USD)</label>
    <input type="text" id="amount" name="amount" placeholder="100">
    <label for="currency">Convert to</label>
    <select id="currency" name="currency">{options}</select>
    <button type="submit">Convert</button>
  </form>
  {message}
</body>
</html>
"#
    )
}
