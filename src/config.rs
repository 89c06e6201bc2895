// Everything the page reaches out to lives here so copy edits never
// touch component code.

pub const CONTACT_EMAIL: &str = "ben@benlewisltd.com";

/// Relay endpoint that forwards a JSON lead to [`CONTACT_EMAIL`].
pub const LEAD_RELAY_URL: &str = "https://formsubmit.co/ajax/ben@benlewisltd.com";

pub const CALENDLY_URL: &str = "https://calendly.com/benlewisstudios/discovery-call";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/benlewisstudios";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/benlewisstudios";
pub const YOUTUBE_URL: &str = "https://www.youtube.com/@benlewisstudios";
