use crate::backend::{Api, ApiError};
use tracing::{info, instrument};

/// State of one selection control: its options, the current selection and
/// whether the user can interact with it.
#[derive(Debug, Default)]
pub struct ControlState {
    options: Vec<String>,
    selected: Option<String>,
    enabled: bool,
}

impl ControlState {
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn clear(&mut self) {
        self.options.clear();
        self.selected = None;
    }
}

/// The country/state/city dependency chain. Dependent loads are direct
/// awaited calls; each step completes before the next selection is applied,
/// so a stale response can never overwrite a newer selection.
#[derive(Debug, Default)]
pub struct RegionSelector {
    country: ControlState,
    state: ControlState,
    city: ControlState,
}

impl RegionSelector {
    /// Loads the country catalog. Happens once at startup; the options stay
    /// put across form resets.
    #[instrument(skip_all)]
    pub async fn load_countries(&mut self, api: &Api) -> Result<(), ApiError> {
        self.country.options = api.countries().await?;
        self.country.enabled = true;
        Ok(())
    }

    #[instrument(skip(self, api))]
    pub async fn select_country(&mut self, api: &Api, country: Option<String>) -> Result<(), ApiError> {
        // The city control always resets and disables, even if a state was
        // previously chosen
        self.city.clear();
        self.city.enabled = false;
        self.state.clear();

        match country.filter(|c| !c.is_empty()) {
            Some(country) => {
                self.country.selected = Some(country.clone());
                self.state.enabled = true;
                self.state.options = api.states(&country).await?;
                info!("🗂️ Loaded {} state(s) for {}", self.state.options.len(), country);
            }
            None => {
                self.country.selected = None;
                self.state.enabled = false;
            }
        }

        Ok(())
    }

    #[instrument(skip(self, api))]
    pub async fn select_state(&mut self, api: &Api, state: Option<String>) -> Result<(), ApiError> {
        self.city.clear();

        let Some(country) = self.country.selected.clone() else {
            self.state.selected = None;
            self.city.enabled = false;
            return Ok(());
        };

        match state.filter(|s| !s.is_empty()) {
            Some(state) => {
                self.state.selected = Some(state.clone());
                self.city.enabled = true;
                self.city.options = api.cities(&country, &state).await?;
                info!("🗂️ Loaded {} city(ies) for {}, {}", self.city.options.len(), state, country);
            }
            None => {
                self.state.selected = None;
                self.city.enabled = false;
            }
        }

        Ok(())
    }

    pub fn select_city(&mut self, city: Option<String>) {
        if !self.city.enabled {
            return;
        }

        self.city.selected = city.filter(|c| !c.is_empty());
    }

    /// Programmatic cascade used by the edit flow: applies country, then
    /// state, then city, awaiting each dependent load in turn.
    #[instrument(skip(self, api))]
    pub async fn cascade(&mut self, api: &Api, country: &str, state: Option<&str>, city: Option<&str>) -> Result<(), ApiError> {
        self.select_country(api, Some(country.to_string())).await?;

        if let Some(state) = state {
            self.select_state(api, Some(state.to_string())).await?;

            if let Some(city) = city {
                self.select_city(Some(city.to_string()));
            }
        }

        Ok(())
    }

    /// Clears all selections and disables the dependent controls. The
    /// country catalog itself is kept.
    pub fn reset(&mut self) {
        self.country.selected = None;
        self.state.clear();
        self.state.enabled = false;
        self.city.clear();
        self.city.enabled = false;
    }

    pub fn country(&self) -> &ControlState {
        &self.country
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn city(&self) -> &ControlState {
        &self.city
    }

    pub fn selected_country(&self) -> Option<&str> {
        self.country.selected()
    }

    pub fn selected_state(&self) -> Option<&str> {
        self.state.selected()
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.city.selected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use reqwest::Client;
    use serde_json::json;

    fn api(server: &mockito::Server) -> Api {
        let config = AppConfigBuilder::new().backend_url(server.url()).build();
        Api::new(Client::new(), &config)
    }

    async fn mock_states(server: &mut mockito::Server, country: &str, states: &[&str]) -> mockito::Mock {
        server
            .mock("POST", "/api/states")
            .match_body(Matcher::Json(json!({ "country": country })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(states).unwrap())
            .create_async()
            .await
    }

    async fn mock_cities(server: &mut mockito::Server, country: &str, state: &str, cities: &[&str]) -> mockito::Mock {
        server
            .mock("POST", "/api/cities")
            .match_body(Matcher::Json(json!({ "country": country, "state": state })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(cities).unwrap())
            .create_async()
            .await
    }

    #[tokio::test]
    async fn selecting_a_country_loads_its_states() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;
        let mock = mock_states(&mut server, "USA", &["CA", "NY"]).await;
        let api = api(&server);

        let mut selector = RegionSelector::default();
        selector.select_country(&api, Some("USA".to_string())).await?;

        mock.assert();
        assert_eq!(selector.selected_country(), Some("USA"));
        assert_eq!(selector.state().options(), ["CA".to_string(), "NY".to_string()]);
        assert!(selector.state().is_enabled());
        assert!(!selector.city().is_enabled());

        Ok(())
    }

    #[tokio::test]
    async fn selecting_a_state_loads_its_cities() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;
        mock_states(&mut server, "USA", &["CA"]).await;
        let mock = mock_cities(&mut server, "USA", "CA", &["San Jose", "Fresno"]).await;
        let api = api(&server);

        let mut selector = RegionSelector::default();
        selector.select_country(&api, Some("USA".to_string())).await?;
        selector.select_state(&api, Some("CA".to_string())).await?;

        mock.assert();
        assert_eq!(selector.selected_state(), Some("CA"));
        assert_eq!(selector.city().options(), ["San Jose".to_string(), "Fresno".to_string()]);
        assert!(selector.city().is_enabled());

        Ok(())
    }

    #[tokio::test]
    async fn changing_country_resets_and_disables_the_city_control() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;
        mock_states(&mut server, "USA", &["CA"]).await;
        mock_cities(&mut server, "USA", "CA", &["San Jose"]).await;
        mock_states(&mut server, "France", &[]).await;
        let api = api(&server);

        let mut selector = RegionSelector::default();
        selector.select_country(&api, Some("USA".to_string())).await?;
        selector.select_state(&api, Some("CA".to_string())).await?;
        selector.select_city(Some("San Jose".to_string()));

        selector.select_country(&api, Some("France".to_string())).await?;

        assert_eq!(selector.selected_state(), None);
        assert_eq!(selector.selected_city(), None);
        assert!(selector.city().options().is_empty());
        assert!(!selector.city().is_enabled());

        Ok(())
    }

    #[tokio::test]
    async fn clearing_the_country_disables_the_state_control() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;
        mock_states(&mut server, "USA", &["CA"]).await;
        let api = api(&server);

        let mut selector = RegionSelector::default();
        selector.select_country(&api, Some("USA".to_string())).await?;
        selector.select_country(&api, None).await?;

        assert_eq!(selector.selected_country(), None);
        assert!(!selector.state().is_enabled());
        assert!(!selector.city().is_enabled());

        Ok(())
    }

    #[tokio::test]
    async fn cascade_applies_country_state_and_city_in_order() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;
        mock_states(&mut server, "USA", &["CA", "NY"]).await;
        mock_cities(&mut server, "USA", "CA", &["San Jose"]).await;
        let api = api(&server);

        let mut selector = RegionSelector::default();
        selector.cascade(&api, "USA", Some("CA"), Some("San Jose")).await?;

        assert_eq!(selector.selected_country(), Some("USA"));
        assert_eq!(selector.selected_state(), Some("CA"));
        assert_eq!(selector.selected_city(), Some("San Jose"));

        Ok(())
    }

    #[tokio::test]
    async fn reset_keeps_the_country_catalog() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/countries")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"name": "USA"}, {"name": "France"}]"#)
            .create_async()
            .await;
        mock_states(&mut server, "USA", &["CA"]).await;
        let api = api(&server);

        let mut selector = RegionSelector::default();
        selector.load_countries(&api).await?;
        selector.select_country(&api, Some("USA".to_string())).await?;
        selector.reset();

        assert_eq!(selector.country().options(), ["USA".to_string(), "France".to_string()]);
        assert_eq!(selector.selected_country(), None);
        assert!(selector.state().options().is_empty());
        assert!(!selector.state().is_enabled());
        assert!(!selector.city().is_enabled());

        Ok(())
    }

    #[test]
    fn a_city_cannot_be_selected_while_the_control_is_disabled() {
        let mut selector = RegionSelector::default();
        selector.select_city(Some("San Jose".to_string()));

        assert_eq!(selector.selected_city(), None);
    }
}
