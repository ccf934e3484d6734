//! Build environment flags and render mode selection.

/// Flags read from the process environment at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    /// `NODE_ENV` is `production`.
    pub production: bool,
    /// `DOC_DEBUG` is set to a non-empty value.
    pub debug: bool,
    /// `BUILD_VERSION` is set, i.e. the build came from source control.
    pub scm: bool,
}

impl Environment {
    /// Read flags from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read flags through a lookup function.
    ///
    /// # Examples
    ///
    /// ```
    /// use docnav_runtime::Environment;
    ///
    /// let env = Environment::from_lookup(|key| {
    ///     (key == "NODE_ENV").then(|| "production".to_owned())
    /// });
    /// assert!(env.production);
    /// assert!(!env.debug);
    /// ```
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let is_set = |key: &str| lookup(key).is_some_and(|value| !value.is_empty());
        Self {
            production: lookup("NODE_ENV").as_deref() == Some("production"),
            debug: is_set("DOC_DEBUG"),
            scm: is_set("BUILD_VERSION"),
        }
    }
}

/// How the page markup is brought to life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Attach to markup produced at build time.
    Hydrate,
    /// Render from scratch.
    Render,
}

impl RenderMode {
    /// Hydrate only production builds that were statically generated.
    #[must_use]
    pub fn select(production: bool, ssg: bool) -> Self {
        if production && ssg {
            Self::Hydrate
        } else {
            Self::Render
        }
    }
}
