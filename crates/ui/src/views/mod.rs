mod accessibility;
mod senso;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use accessibility::{
    AccessibilityCategoriesOverview, AccessibilityCategoryPanel, AccessibilityMenuView,
};
pub use senso::{SensoButton, SensoView};
