// Server-rendered HTML shell: sidebar controls and the chat transcript.
// Form posts run a session action, leave a notice, and redirect back to `/`.

pub mod handlers;
pub mod page;
