// End-to-end tests for the Storyteller Backend API
//
// Each test starts the real router on an ephemeral port with stub provider
// repositories in place of OpenAI, then drives it over HTTP. Stubs record
// what reached the provider boundary so tests can assert on it.

mod helpers;
mod test_health;
