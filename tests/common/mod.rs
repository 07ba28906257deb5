pub mod mock_gateway;
pub mod mock_recognizer;

use snapscribe::responses::ResponsePicker;

/// Picker that always chooses the same index, for deterministic tests
pub struct FixedPicker(pub usize);

impl ResponsePicker for FixedPicker {
    fn pick<'a>(&self, options: &'a [&'a str]) -> &'a str {
        options[self.0 % options.len()]
    }
}
