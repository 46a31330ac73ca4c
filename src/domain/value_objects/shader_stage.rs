//! Shader pipeline stages recognized by their file extension

use std::fmt;
use std::path::Path;

/// Pipeline stage of a GLSL source file.
///
/// The stage is informational only: it never changes how the compiler is
/// invoked, since both `glslc` and `glslangValidator` infer it from the
/// extension themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
    TessControl,
    TessEvaluation,
    Compute,
}

impl ShaderStage {
    /// All recognized stages, in pipeline order.
    pub const ALL: [ShaderStage; 6] = [
        ShaderStage::Vertex,
        ShaderStage::TessControl,
        ShaderStage::TessEvaluation,
        ShaderStage::Geometry,
        ShaderStage::Fragment,
        ShaderStage::Compute,
    ];

    /// File extension (without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
            ShaderStage::Geometry => "geom",
            ShaderStage::TessControl => "tesc",
            ShaderStage::TessEvaluation => "tese",
            ShaderStage::Compute => "comp",
        }
    }

    /// Human-readable stage name.
    pub fn name(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Geometry => "geometry",
            ShaderStage::TessControl => "tessellation control",
            ShaderStage::TessEvaluation => "tessellation evaluation",
            ShaderStage::Compute => "compute",
        }
    }

    /// Match an extension exactly (case-sensitive, no leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.extension() == ext)
    }

    /// Stage of a path, if its extension is recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `path` has one of the recognized shader extensions.
pub fn is_shader_source(path: &Path) -> bool {
    ShaderStage::from_path(path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_every_stage_extension() {
        for (ext, stage) in [
            ("vert", ShaderStage::Vertex),
            ("frag", ShaderStage::Fragment),
            ("geom", ShaderStage::Geometry),
            ("tesc", ShaderStage::TessControl),
            ("tese", ShaderStage::TessEvaluation),
            ("comp", ShaderStage::Compute),
        ] {
            assert_eq!(ShaderStage::from_extension(ext), Some(stage));
        }
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        assert_eq!(ShaderStage::from_extension("FRAG"), None);
        assert!(!is_shader_source(Path::new("lit.Vert")));
    }

    #[test]
    fn artifacts_and_includes_are_not_sources() {
        assert!(!is_shader_source(Path::new("triangle.frag.spv")));
        assert!(!is_shader_source(Path::new("common.glsl")));
        assert!(!is_shader_source(Path::new("frag")));
    }

    #[test]
    fn stage_from_nested_path() {
        assert_eq!(
            ShaderStage::from_path(Path::new("post/bloom.comp")),
            Some(ShaderStage::Compute)
        );
    }
}
