use thiserror::Error;

/// The number of arguments supplied to a format string differs from its placeholder count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("format has {expected} placeholders but {given} arguments were supplied")]
pub struct ArityError {
    pub expected: usize,
    pub given: usize,
}

enum Piece<'a> {
    Text(&'a str),
    Placeholder,
}

// `{}` is a placeholder, `{{` and `}}` are escaped braces, anything else is literal.
fn walk<'a>(form: &'a str, mut emit: impl FnMut(Piece<'a>)) {
    let bytes = form.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i + 1 < bytes.len() {
        match &bytes[i..i + 2] {
            b"{}" => {
                emit(Piece::Text(&form[start..i]));
                emit(Piece::Placeholder);
            }
            b"{{" | b"}}" => emit(Piece::Text(&form[start..=i])),
            _ => {
                i += 1;
                continue;
            }
        }
        i += 2;
        start = i;
    }
    emit(Piece::Text(&form[start..]));
}

pub fn count_placeholders(form: &str) -> usize {
    let mut count = 0;
    walk(form, |piece| {
        if let Piece::Placeholder = piece {
            count += 1;
        }
    });
    count
}

/// Substitute `args` into the placeholders of `form`, in order.
pub fn render<S: AsRef<str>>(form: &str, args: &[S]) -> Result<String, ArityError> {
    let expected = count_placeholders(form);
    if expected != args.len() {
        return Err(ArityError {
            expected,
            given: args.len(),
        });
    }

    let capacity = form.len() + args.iter().map(|a| a.as_ref().len()).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    let mut next = args.iter();
    walk(form, |piece| match piece {
        Piece::Text(text) => out.push_str(text),
        Piece::Placeholder => {
            if let Some(arg) = next.next() {
                out.push_str(arg.as_ref());
            }
        }
    });
    Ok(out)
}
