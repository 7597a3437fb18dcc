//! Printf-style template substitution for `echo`.

/// Substitute `%`-directives in `template` with `args` in order.
///
/// Any `%` followed by a directive letter (`%s`, `%d`, `%v`, …) consumes the
/// next argument; the substituted text is always the argument's rendering
/// regardless of the letter. `%%` emits a literal percent. A directive with
/// no remaining argument, a `%` before a non-letter, and a trailing lone `%`
/// all pass through verbatim.
pub(crate) fn format_template(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(letter) if letter.is_ascii_alphabetic() => {
                chars.next();
                if let Some(arg) = args.get(next_arg) {
                    out.push_str(arg);
                    next_arg += 1;
                } else {
                    out.push('%');
                    out.push(letter);
                }
            }
            _ => out.push('%'),
        }
    }

    out
}
