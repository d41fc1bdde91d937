use resconf_domain::Configuration;
use resconf_domain::config::Profile;

/// Supplies the live device/runtime configuration.
///
/// Implementations write only the axes they know about and leave the rest untouched.
pub trait EnvironmentSource {
    fn populate(&self, out: &mut Configuration);
}

impl EnvironmentSource for Configuration {
    fn populate(&self, out: &mut Configuration) {
        out.copy_from(self);
    }
}

/// A profile supplies the environment it was written for.
impl EnvironmentSource for Profile {
    fn populate(&self, out: &mut Configuration) {
        out.copy_from(&self.environment);
    }
}

impl<E: EnvironmentSource + ?Sized> EnvironmentSource for &E {
    fn populate(&self, out: &mut Configuration) {
        (**self).populate(out);
    }
}

/// Fills `out` from `env`.
pub fn populate_from<E: EnvironmentSource + ?Sized>(out: &mut Configuration, env: &E) {
    env.populate(out);
}

/// A fresh configuration populated from `env`.
#[must_use]
pub fn from_environment<E: EnvironmentSource + ?Sized>(env: &E) -> Configuration {
    let mut out = Configuration::new();
    env.populate(&mut out);
    out
}
