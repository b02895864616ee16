use pnet::util::MacAddr;

pub const OCTETS: usize = 6;

/// Parses `XX:XX:XX:XX:XX:XX` strictly.
///
/// Every group must be exactly two hex digits (either case) and the string
/// must contain nothing else. Returns `None` for anything looser, such as
/// `-` separators, single-digit groups or surrounding whitespace.
pub fn parse_strict(input: &str) -> Option<MacAddr> {
    let mut octets: [u8; OCTETS] = [0; OCTETS];
    let mut groups = input.split(':');

    for octet in octets.iter_mut() {
        let group: &str = groups.next()?;
        if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        *octet = u8::from_str_radix(group, 16).ok()?;
    }

    if groups.next().is_some() {
        return None;
    }

    let [a, b, c, d, e, f] = octets;
    Some(MacAddr::new(a, b, c, d, e, f))
}
