//! Property tests for shader path validation and artifact mapping.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use shader_watch::domain::value_objects::is_shader_source;
use shader_watch::{ShaderPath, ShaderStage};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,11}").unwrap()
}

fn directories() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 0..=3)
}

fn stage() -> impl Strategy<Value = ShaderStage> {
    proptest::sample::select(ShaderStage::ALL.to_vec())
}

fn relative_source(dirs: &[String], stem: &str, stage: ShaderStage) -> PathBuf {
    let mut path: PathBuf = dirs.iter().collect();
    path.push(format!("{}.{}", stem, stage.extension()));
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation never panics on arbitrary input.
    #[test]
    fn property_new_never_panics(s in "(?s).{0,256}") {
        let _ = ShaderPath::new(&s);
        let _ = ShaderPath::within_root(&s, "/project/shaders");
    }

    /// PROPERTY: The artifact keeps the source's relative directory and full
    /// file name, with the artifact extension appended.
    #[test]
    fn property_artifact_mirrors_source(
        dirs in directories(),
        stem in segment(),
        stage in stage(),
        ext in "[a-z]{1,5}"
    ) {
        let relative = relative_source(&dirs, &stem, stage);
        let shader = ShaderPath::new(&relative).unwrap();

        let artifact = shader.artifact_in(Path::new("/out"), &ext);
        let mirrored = Path::new("/out").join(&relative);

        prop_assert_eq!(artifact.parent(), mirrored.parent());
        prop_assert_eq!(
            artifact.file_name().unwrap().to_string_lossy().into_owned(),
            format!("{}.{}.{}", stem, stage.extension(), ext)
        );
        prop_assert_eq!(shader.stage(), stage);
    }

    /// PROPERTY: Any path under the root resolves back to its relative form.
    #[test]
    fn property_within_root_strips_root(
        dirs in directories(),
        stem in segment(),
        stage in stage()
    ) {
        let root = Path::new("/project/shaders");
        let relative = relative_source(&dirs, &stem, stage);

        let shader = ShaderPath::within_root(root.join(&relative), root).unwrap();

        prop_assert_eq!(shader.relative(), relative.as_path());
    }

    /// PROPERTY: Only the six stage extensions are shader sources.
    #[test]
    fn property_unknown_extensions_are_ignored(
        stem in segment(),
        ext in "[a-z]{1,6}"
    ) {
        let path = PathBuf::from(format!("{}.{}", stem, ext));
        let known = ShaderStage::ALL.iter().any(|s| s.extension() == ext);
        prop_assert_eq!(is_shader_source(&path), known);
    }
}
