//! Built-in pipeline template tables.
//!
//! One `const` table per language plus a base table; every entry's
//! `language` matches its table. Template file contents are embedded at
//! compile time and addressed by their path under `templates/`.

use include_dir::{include_dir, Dir};

use super::language::Language;

/// Embedded template files.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Hosting target a template deploys to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    WebApp,
}

impl TargetType {
    /// Wire-level resource type for this target.
    pub fn resource_type(&self) -> &'static str {
        match self {
            TargetType::WebApp => "Microsoft.Web/sites",
        }
    }
}

/// Kind tag narrowing a hosting target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    WindowsApp,
    LinuxApp,
    FunctionApp,
}

impl TargetKind {
    /// Wire-level kind tag carried by matching resources.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::WindowsApp => "app",
            TargetKind::LinuxApp => "app,linux",
            TargetKind::FunctionApp => "functionapp",
        }
    }
}

/// Target filter attached to a template.
///
/// An absent kind means the template matches any kind of its target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetFilter {
    pub target_type: TargetType,
    pub target_kind: Option<TargetKind>,
}

/// A pipeline template offered by the scaffolding flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineTemplate {
    /// Display label shown to the user.
    pub label: &'static str,

    /// Template file path under `templates/`.
    pub path: &'static str,

    /// Language this template is written for.
    pub language: Language,

    /// Hosting targets this template can deploy to.
    pub filters: TargetFilter,
}

const fn windows_web_app() -> TargetFilter {
    TargetFilter {
        target_type: TargetType::WebApp,
        target_kind: Some(TargetKind::WindowsApp),
    }
}

const fn linux_web_app() -> TargetFilter {
    TargetFilter {
        target_type: TargetType::WebApp,
        target_kind: Some(TargetKind::LinuxApp),
    }
}

/// Fallback table, offered regardless of the inferred language.
pub const BASE_TEMPLATES: &[PipelineTemplate] = &[PipelineTemplate {
    label: "Simple application to Windows Web App",
    path: "simple-webapp.yml",
    language: Language::None,
    filters: windows_web_app(),
}];

pub const NODE_TEMPLATES: &[PipelineTemplate] = &[
    PipelineTemplate {
        label: "Node.js with npm to Windows Web App",
        path: "nodejs.yml",
        language: Language::Node,
        filters: windows_web_app(),
    },
    PipelineTemplate {
        label: "Node.js with Gulp to Windows Web App",
        path: "nodejs-gulp.yml",
        language: Language::Node,
        filters: windows_web_app(),
    },
    PipelineTemplate {
        label: "Node.js with Grunt to Windows Web App",
        path: "nodejs-grunt.yml",
        language: Language::Node,
        filters: windows_web_app(),
    },
    PipelineTemplate {
        label: "Node.js with Angular to Windows Web App",
        path: "nodejs-angular.yml",
        language: Language::Node,
        filters: windows_web_app(),
    },
    PipelineTemplate {
        label: "Node.js with Webpack to Windows Web App",
        path: "nodejs-webpack.yml",
        language: Language::Node,
        filters: windows_web_app(),
    },
];

pub const JAVA_TEMPLATES: &[PipelineTemplate] = &[PipelineTemplate {
    label: "Maven with Java to Linux Web App",
    path: "java-maven-linux-webapp.yml",
    language: Language::Java,
    filters: linux_web_app(),
}];

pub const PYTHON_TEMPLATES: &[PipelineTemplate] = &[PipelineTemplate {
    label: "Python with Django to Windows Web App",
    path: "python-django-windows-webapp.yml",
    language: Language::Python,
    filters: windows_web_app(),
}];

/// Table for a given language. `Language::None` has no table of its own;
/// such repositories get the base templates only.
pub fn templates_for(language: Language) -> &'static [PipelineTemplate] {
    match language {
        Language::Java => JAVA_TEMPLATES,
        Language::Node => NODE_TEMPLATES,
        Language::Python => PYTHON_TEMPLATES,
        Language::None => &[],
    }
}

/// Content of an embedded template file, by catalog path.
pub fn builtin_content(path: &str) -> Option<&'static str> {
    TEMPLATES_DIR.get_file(path).and_then(|f| f.contents_utf8())
}
