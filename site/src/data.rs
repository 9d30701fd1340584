//! Generates `elements.json` and the selector script.

use anyhow::Result;

use crate::extractor::element_records;

/// Serializes every element with its notations, image and coset.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn generate_elements_json() -> Result<String> {
    let records = element_records();
    let json = serde_json::to_string_pretty(&records)
        .map_err(|e| anyhow::anyhow!("Failed to serialize element table: {}", e))?;
    Ok(json)
}

/// Returns the script that turns a selector change into navigation.
pub fn select_js() -> &'static str {
    r#"// Selecting a notation or an element opens the matching page.

(function () {
  'use strict';

  ['notation_select', 'S4-element-select'].forEach(function (id) {
    const select = document.getElementById(id);
    if (!select) return;

    select.addEventListener('change', function () {
      const option = select.options[select.selectedIndex];
      const target = option && option.dataset.href;
      if (target) window.location.href = target;
    });
  });
}());
"#
}
