use std::path::Path;

/// Which end of the visible list receives a fresh copy of the image list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

/// Display label of an image: the last `/`-separated segment, cut before the
/// first `.png`. Other extensions are kept as-is.
pub fn label(url: &str) -> &str {
    let last = url.rsplit('/').next().unwrap_or(url);
    match last.find(".png") {
        Some(end) => &last[..end],
        None => last,
    }
}

/// Returns `visible` with a full copy of `original` added at `edge`.
///
/// Nothing is deduplicated, so repeated extension keeps growing the list.
pub fn extend(visible: &[String], original: &[String], edge: Edge) -> Vec<String> {
    let mut extended = Vec::with_capacity(visible.len() + original.len());
    match edge {
        Edge::End => {
            extended.extend_from_slice(visible);
            extended.extend_from_slice(original);
        }
        Edge::Start => {
            extended.extend_from_slice(original);
            extended.extend_from_slice(visible);
        }
    }
    extended
}

/// Turns discovered image paths into the string form the carousel keys on.
pub fn path_urls(paths: &[impl AsRef<Path>]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.as_ref().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn list(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn label_strips_directories_and_png() {
        assert_eq!(label("/a/b/cat.png"), "cat");
        assert_eq!(label("photo.png"), "photo");
        assert_eq!(label("images/dir/"), "");
    }

    #[test]
    fn label_keeps_other_extensions() {
        assert_eq!(label("/a/b/cat.jpg"), "cat.jpg");
        assert_eq!(label("shot.png.bak"), "shot");
    }

    #[test]
    fn extend_appends_and_prepends_full_copies() {
        let original = list(&["1", "2", "3"]);
        let visible = list(&["1", "2", "3"]);

        let after = extend(&visible, &original, Edge::End);
        assert_eq!(after, list(&["1", "2", "3", "1", "2", "3"]));

        let before = extend(&after, &original, Edge::Start);
        assert_eq!(before.len(), 9);
        assert_eq!(&before[..3], original.as_slice());
    }

    #[test]
    fn extend_does_not_touch_inputs() {
        let original = list(&["a"]);
        let visible = list(&["a"]);
        let _ = extend(&visible, &original, Edge::End);
        assert_eq!(visible, list(&["a"]));
    }

    #[test]
    fn path_urls_use_forward_slashes() {
        let urls = path_urls(&["imgs/one.png", "imgs\\two.png"]);
        assert_eq!(urls, list(&["imgs/one.png", "imgs/two.png"]));
        assert_eq!(label(&urls[1]), "two");
    }
}
