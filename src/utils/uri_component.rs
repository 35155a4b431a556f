use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is by URI component encoding: the unreserved set plus
/// the sub-delimiters `! * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value for use inside a URI query component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unreserved_and_sub_delimiters() {
        assert_eq!(encode_component("hi! (it's me)*"), "hi!%20(it's%20me)*");
        assert_eq!(encode_component("a-b_c.d~e"), "a-b_c.d~e");
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(encode_component("5&6?=#/:;,+@$"), "5%266%3F%3D%23%2F%3A%3B%2C%2B%40%24");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
    }

    #[test]
    fn encodes_utf8_bytes() {
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn data_url_is_fully_escaped() {
        assert_eq!(
            encode_component("data:image/png;base64,iVB+/w=="),
            "data%3Aimage%2Fpng%3Bbase64%2CiVB%2B%2Fw%3D%3D"
        );
    }
}
