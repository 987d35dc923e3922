use crate::chrome::CHROME_SELECTORS;
use crate::rescaler::{FALLBACK_BASE_FONT_SIZE, LIST_LINE_HEIGHT, MAX_GROWTH, MAX_SCALABLE_FONT_SIZE};
use crate::ScaleFactor;

const TEMPLATE: &str = r#"(function () {
  var scale = {{SCALE}};
  var root = document.documentElement;
  var baseFontSize = parseFloat(root.dataset.baseFontSize);
  if (isNaN(baseFontSize)) {
    baseFontSize = {{BASE}};
    var anchor = document.querySelector('p') || document.body;
    if (anchor) {
      baseFontSize = parseFloat(window.getComputedStyle(anchor).fontSize) || {{BASE}};
    }
    root.dataset.baseFontSize = baseFontSize;
  }
  console.log('font scaling (scale factor: ' + scale + '), base font size ' + baseFontSize + 'px');

  var describe = function (element, inList) {
    var description = element.tagName.toLowerCase();
    if (element.id) {
      description += '#' + element.id;
    } else if (typeof element.className === 'string' && element.className.split(' ')[0]) {
      description += '.' + element.className.split(' ')[0];
    }
    return inList ? description + ' (in-list)' : description;
  };

  var elements = Array.prototype.slice.call(document.querySelectorAll('*'));
  var computed = elements.map(function (element) {
    return parseFloat(window.getComputedStyle(element).fontSize);
  });
  elements.forEach(function (element, index) {
    if (element.dataset.fontScalingExcluded) {
      return;
    }
    var inList = element.closest('ul, ol, li') !== null;
    var original = parseFloat(element.dataset.originalFontSize);
    if (isNaN(original)) {
      var current = computed[index];
      if (isNaN(current) || current <= 0 || current > {{MAX_SIZE}}) {
        element.dataset.fontScalingExcluded = 'true';
        return;
      }
      var normalized = inList || ['P', 'A', 'LI', 'UL', 'OL'].indexOf(element.tagName) >= 0;
      original = normalized ? baseFontSize : current;
      element.dataset.originalFontSize = original;
    }
    var size = Math.min(original * scale, original * {{GROWTH}});
    element.style.fontSize = size + 'px';

    var text = (element.textContent || '').trim();
    if (text.length > 0 || size >= 16) {
      console.log('- ' + describe(element, inList) + ' ' + JSON.stringify(text.substring(0, 20)));
      console.log('    - original: ' + original + 'px');
      console.log('    - scaled: ' + size + 'px');
    }
  });

  var listFontSize = baseFontSize * scale;
  var style = document.createElement('style');
  style.textContent =
    'ul, ol, li, ul *, ol *, li *, a { font-size: ' + listFontSize + 'px !important; }' +
    'li::before, li::marker { font-size: inherit !important; }' +
    'li { line-height: {{LINE_HEIGHT}} !important; }';
  document.head.appendChild(style);
  console.log('list and hyperlink font size forced to ' + listFontSize + 'px');

  {{CHROME}}.forEach(function (selector) {
    document.querySelectorAll(selector).forEach(function (element) {
      element.style.display = 'none';
      console.log('hidden element: ' + selector);
    });
  });
})();"#;

/// Self-contained script rescaling a page inside of web view engine.
/// Computed sizes are read before any change, so result does not depend on element order.
/// Base size, originals and excluded elements are kept in `data-*` attributes,
/// so running script again on the same page changes nothing.
pub fn rescaling_script(scale: ScaleFactor) -> String {
    // serializing list of static strings never fails
    let chrome = serde_json::to_string(&CHROME_SELECTORS).unwrap_or_else(|_| "[]".to_string());
    TEMPLATE
        .replace("{{SCALE}}", &scale.to_string())
        .replace("{{BASE}}", &FALLBACK_BASE_FONT_SIZE.to_string())
        .replace("{{MAX_SIZE}}", &MAX_SCALABLE_FONT_SIZE.to_string())
        .replace("{{GROWTH}}", &MAX_GROWTH.to_string())
        .replace("{{LINE_HEIGHT}}", &LIST_LINE_HEIGHT.to_string())
        .replace("{{CHROME}}", &chrome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextSizeLevel;

    #[test]
    pub fn test_script_literals_substituted() {
        let script = rescaling_script(TextSizeLevel::Accessibility2.scale());
        assert!(script.contains("var scale = 1.6;"));
        assert!(script.contains("    baseFontSize = 16;"));
        assert!(script.contains("current > 100"));
        assert!(script.contains("original * 2)"));
        assert!(script.contains("line-height: 1.4 !important"));
        assert!(!script.contains("{{"));
    }

    #[test]
    pub fn test_script_remembers_first_pass() {
        let script = rescaling_script(ScaleFactor::new(1.5));
        assert!(script.contains("root.dataset.baseFontSize = baseFontSize;"));
        assert!(script.contains("element.dataset.fontScalingExcluded = 'true';"));
        assert!(script.contains("element.dataset.originalFontSize = original;"));
    }

    #[test]
    pub fn test_script_logs_scaled_elements() {
        let script = rescaling_script(ScaleFactor::new(1.5));
        assert!(script.contains("description + ' (in-list)'"));
        assert!(script.contains("'    - original: ' + original + 'px'"));
        assert!(script.contains("'    - scaled: ' + size + 'px'"));
    }

    #[test]
    pub fn test_script_hides_chrome() {
        let script = rescaling_script(ScaleFactor::NEUTRAL);
        assert!(script.contains(r#"["header","footer","[role=\"banner\"]""#));
        assert!(script.contains(r#"".navbar"].forEach"#));
    }

    #[test]
    pub fn test_script_self_invoking() {
        let script = rescaling_script(ScaleFactor::NEUTRAL);
        assert!(script.starts_with("(function () {"));
        assert!(script.ends_with("})();"));
    }
}
