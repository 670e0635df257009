use crate::{BuildDescriptor, BuildSelection, Manifest};
use bcap_capability::{Capability, ClientCapabilitySet};

/// The precedence of a build: the summed weight of its required capabilities.
///
/// Unknown capabilities weigh nothing.
#[must_use]
pub fn score(build: &BuildDescriptor) -> u32 {
    build
        .required_capabilities
        .iter()
        .map(Capability::weight)
        .sum()
}

/// A build together with its score and its position in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedBuild<'a> {
    /// The ranked build.
    pub build: &'a BuildDescriptor,
    /// The [`score`] of the build.
    pub score: u32,
    /// Position of the build in the original list.
    pub index: usize,
}

/// Order builds from most to least demanding.
///
/// Equally scored builds keep their declaration order. The given
/// builds are left untouched, the ranking lives in a side table.
#[must_use]
pub fn rank_builds(builds: &[BuildDescriptor]) -> Vec<RankedBuild<'_>> {
    let mut ranked: Vec<_> = builds
        .iter()
        .enumerate()
        .map(|(index, build)| RankedBuild {
            build,
            score: score(build),
            index,
        })
        .collect();
    // stable: first declared wins among equal scores
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Returns true if a client with the given capabilities
/// can run a build with the given requirements.
#[must_use]
pub fn can_serve(client: &ClientCapabilitySet, requirements: &[Capability]) -> bool {
    client.contains_all(requirements)
}

/// Choose the most capable build the client can run.
///
/// Builds are tried from most to least demanding (see [`rank_builds`])
/// and the first one whose requirements are all met by the client is chosen.
/// A build without requirements is always met. `None` is returned when no build
/// qualifies, which can only happen when the manifest lacks such a fallback build.
#[must_use]
pub fn choose_build(
    builds: &[BuildDescriptor],
    client: &ClientCapabilitySet,
) -> Option<BuildSelection> {
    let ranked = rank_builds(builds);
    tracing::trace!(
        builds.count = builds.len(),
        "ranked builds: {:?}",
        ranked
            .iter()
            .map(|r| (r.build.name.as_str(), r.score))
            .collect::<Vec<_>>(),
    );

    match ranked
        .into_iter()
        .find(|r| can_serve(client, &r.build.required_capabilities))
    {
        Some(RankedBuild { build, score, .. }) => {
            tracing::debug!(
                build.name = %build.name,
                build.score = score,
                "build chosen for client capabilities [{client}]",
            );
            Some(BuildSelection::new(build))
        }
        None => {
            tracing::debug!(
                builds.count = builds.len(),
                "no build matches client capabilities [{client}]",
            );
            None
        }
    }
}

impl Manifest {
    /// Choose the most capable build of this manifest the client can run.
    ///
    /// See [`choose_build`] for more information.
    #[must_use]
    pub fn choose(&self, client: &ClientCapabilitySet) -> Option<BuildSelection> {
        choose_build(&self.builds, client)
    }
}
