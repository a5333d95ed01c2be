//! Path segmentation for both addressing styles, and the inverse.

use super::host::AddressingStyle;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::borrow::Cow;

/// Bytes escaped when writing a path piece back out. `/` is left alone so a
/// directory path keeps its separators; `\` is escaped because special
/// schemes read a raw one as `/`.
const PATH_PIECE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A path piece as it appeared in the parsed URL.
///
/// While the field still holds `decoded`, Build writes `encoded` back as-is,
/// so escapes a `String` can't carry (invalid UTF-8, `%2F` inside a name)
/// survive the round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SourcePiece {
    decoded: String,
    encoded: String,
}

/// Encoded forms of the account, share and directory pieces of a parsed URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SourcePath {
    account: SourcePiece,
    share: SourcePiece,
    dir: SourcePiece,
}

/// Decoded path pieces. Empty strings mean "not addressed".
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct PathSegments {
    pub account_name: String,
    pub share_name: String,
    pub directory_or_file_path: String,
    pub source: SourcePath,
}

/// Splits a URL path (as returned by `Url::path`, still percent-encoded).
///
/// One leading `/` is dropped. The directory/file path is everything after the
/// share segment and is not split further, so an empty share segment
/// (`//dir/f`) leaves `share_name` empty and the rest in the directory path.
pub(crate) fn split_path(path: &str, style: AddressingStyle) -> PathSegments {
    let path = path.strip_prefix('/').unwrap_or(path);
    let mut out = PathSegments::default();
    if path.is_empty() {
        return out;
    }

    let rest = match style {
        AddressingStyle::IpEndpoint => match path.split_once('/') {
            Some((account, rest)) => {
                (out.account_name, out.source.account) = take_piece(account);
                rest
            }
            None => {
                (out.account_name, out.source.account) = take_piece(path);
                return out;
            }
        },
        AddressingStyle::NamedHost => path,
    };

    match rest.split_once('/') {
        Some((share, dir)) => {
            (out.share_name, out.source.share) = take_piece(share);
            (out.directory_or_file_path, out.source.dir) = take_piece(dir);
        }
        None => {
            (out.share_name, out.source.share) = take_piece(rest);
        }
    }
    out
}

/// Rebuilds the encoded URL path. Returns an empty string when nothing is addressed.
pub(crate) fn join_path(
    style: AddressingStyle,
    account_name: &str,
    share_name: &str,
    directory_or_file_path: &str,
    source: &SourcePath,
) -> String {
    let mut path = String::new();
    if style.is_ip_endpoint() && !account_name.is_empty() {
        push_piece(&mut path, account_name, &source.account);
    }
    if !share_name.is_empty() {
        push_piece(&mut path, share_name, &source.share);
    }
    if !directory_or_file_path.is_empty() {
        push_piece(&mut path, directory_or_file_path, &source.dir);
    }
    path
}

fn push_piece(path: &mut String, piece: &str, source: &SourcePiece) {
    path.push('/');
    if !source.encoded.is_empty() && source.decoded == piece {
        path.push_str(&source.encoded);
    } else {
        path.extend(utf8_percent_encode(piece, PATH_PIECE));
    }
}

/// Decodes `raw`, or keeps it encoded when the bytes are not UTF-8.
fn take_piece(raw: &str) -> (String, SourcePiece) {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string());
    let source = SourcePiece {
        decoded: decoded.clone(),
        encoded: raw.to_string(),
    };
    (decoded, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join(style: AddressingStyle, account: &str, share: &str, dir: &str) -> String {
        join_path(style, account, share, dir, &SourcePath::default())
    }

    #[test]
    fn named_host_share_and_path() {
        let s = split_path("/myshare/dir/file.txt", AddressingStyle::NamedHost);
        assert_eq!(s.account_name, "");
        assert_eq!(s.share_name, "myshare");
        assert_eq!(s.directory_or_file_path, "dir/file.txt");
    }

    #[test]
    fn named_host_share_only() {
        let s = split_path("/myshare", AddressingStyle::NamedHost);
        assert_eq!(s.share_name, "myshare");
        assert_eq!(s.directory_or_file_path, "");
    }

    #[test]
    fn ip_endpoint_account_share_and_path() {
        let s = split_path("/myaccount/myshare/dir/file.txt", AddressingStyle::IpEndpoint);
        assert_eq!(s.account_name, "myaccount");
        assert_eq!(s.share_name, "myshare");
        assert_eq!(s.directory_or_file_path, "dir/file.txt");
    }

    #[test]
    fn ip_endpoint_account_only() {
        let s = split_path("/myaccount", AddressingStyle::IpEndpoint);
        assert_eq!(s.account_name, "myaccount");
        assert_eq!(s.share_name, "");
        assert_eq!(s.directory_or_file_path, "");
    }

    #[test]
    fn empty_and_root() {
        assert_eq!(split_path("", AddressingStyle::NamedHost), PathSegments::default());
        assert_eq!(split_path("/", AddressingStyle::IpEndpoint), PathSegments::default());
    }

    #[test]
    fn empty_share_segment() {
        let s = split_path("//share/f", AddressingStyle::NamedHost);
        assert_eq!(s.share_name, "");
        assert_eq!(s.directory_or_file_path, "share/f");
    }

    #[test]
    fn decodes_pieces() {
        let s = split_path("/my%20share/caf%C3%A9/a%23b.txt", AddressingStyle::NamedHost);
        assert_eq!(s.share_name, "my share");
        assert_eq!(s.directory_or_file_path, "café/a#b.txt");
    }

    #[test]
    fn non_utf8_piece_stays_encoded() {
        let s = split_path("/share/%FF.bin", AddressingStyle::NamedHost);
        assert_eq!(s.directory_or_file_path, "%FF.bin");
        let p = join_path(
            AddressingStyle::NamedHost,
            "",
            &s.share_name,
            &s.directory_or_file_path,
            &s.source,
        );
        assert_eq!(p, "/share/%FF.bin");
    }

    #[test]
    fn unchanged_pieces_keep_source_escapes() {
        let s = split_path("/my%5Cshare/a%2Fb/%41.txt", AddressingStyle::NamedHost);
        assert_eq!(s.share_name, "my\\share");
        assert_eq!(s.directory_or_file_path, "a/b/A.txt");
        let p = join_path(
            AddressingStyle::NamedHost,
            "",
            &s.share_name,
            &s.directory_or_file_path,
            &s.source,
        );
        assert_eq!(p, "/my%5Cshare/a%2Fb/%41.txt");
    }

    #[test]
    fn changed_piece_is_encoded_fresh() {
        let s = split_path("/share/%FF.bin", AddressingStyle::NamedHost);
        let p = join_path(AddressingStyle::NamedHost, "", &s.share_name, "%FF.bin.old", &s.source);
        assert_eq!(p, "/share/%25FF.bin.old");
    }

    #[test]
    fn join_escapes_backslash() {
        assert_eq!(
            join(AddressingStyle::NamedHost, "", "my\\share", "a\\b.txt"),
            "/my%5Cshare/a%5Cb.txt"
        );
    }

    #[test]
    fn join_encodes_and_keeps_separators() {
        let p = join(AddressingStyle::NamedHost, "ignored", "my share", "café/a#b.txt");
        assert_eq!(p, "/my%20share/caf%C3%A9/a%23b.txt");
    }

    #[test]
    fn join_ip_endpoint() {
        assert_eq!(
            join(AddressingStyle::IpEndpoint, "acct", "share", "d/f"),
            "/acct/share/d/f"
        );
        assert_eq!(join(AddressingStyle::IpEndpoint, "", "share", ""), "/share");
        assert_eq!(join(AddressingStyle::NamedHost, "", "", ""), "");
    }
}
