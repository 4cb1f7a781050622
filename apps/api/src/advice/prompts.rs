// Prompts for live advice and learning roadmaps.

/// Placeholders: {profile}, {matches}
pub const ADVICE_PROMPT_TEMPLATE: &str = "\
Create personalized career advice for the following person.

PROFILE:
{profile}

TOP CAREER MATCHES (role, match percentage, missing skills):
{matches}

Write a short assessment of where they stand, then a numbered path of 4-6 concrete steps \
toward their career goal. Refer to their missing skills by name.";

/// Placeholders: {skills}, {target_role}
pub const ROADMAP_PROMPT_TEMPLATE: &str = "\
The user has these skills: {skills}.
They want to become a {target_role}.
Make a 3-month step-by-step learning roadmap with milestones.
Show clear weekly tasks and goals.";
