/*
[INPUT]:  New stories and ledger entries, bearer token
[OUTPUT]: Stories, financial entries and analytics from the backend
[POS]:    HTTP layer - resource endpoints (require bearer token)
[UPDATE]: When adding new resource endpoints or changing their paths
*/

use reqwest::Method;

use crate::http::{HevaClient, Result};
use crate::types::{
    DashboardAnalytics, FinancialEntry, NewFinancialEntry, NewStory, Story, UserAnalytics,
};

const STORIES_ENDPOINT: &str = "/stories/stories/";
const FINANCE_ENDPOINT: &str = "/finance/entries/";
const USER_ANALYTICS_ENDPOINT: &str = "/analytics/user-analytics/";
const DASHBOARD_ANALYTICS_ENDPOINT: &str = "/analytics/dashboard/";

impl HevaClient {
    /// GET /stories/stories/
    pub async fn get_stories(&self) -> Result<Vec<Story>> {
        let builder = self.authed_request(Method::GET, STORIES_ENDPOINT)?;
        self.send_authed_json(builder, "Failed to fetch stories").await
    }

    /// POST /stories/stories/
    pub async fn create_story(&self, story: &NewStory) -> Result<Story> {
        let builder = self
            .authed_request(Method::POST, STORIES_ENDPOINT)?
            .json(story);
        self.send_authed_json(builder, "Failed to create story").await
    }

    /// GET /finance/entries/
    pub async fn get_financial_entries(&self) -> Result<Vec<FinancialEntry>> {
        let builder = self.authed_request(Method::GET, FINANCE_ENDPOINT)?;
        self.send_authed_json(builder, "Failed to fetch financial entries")
            .await
    }

    /// POST /finance/entries/
    pub async fn create_financial_entry(&self, entry: &NewFinancialEntry) -> Result<FinancialEntry> {
        let builder = self
            .authed_request(Method::POST, FINANCE_ENDPOINT)?
            .json(entry);
        self.send_authed_json(builder, "Failed to create financial entry")
            .await
    }

    /// GET /analytics/user-analytics/
    pub async fn get_user_analytics(&self) -> Result<UserAnalytics> {
        let builder = self.authed_request(Method::GET, USER_ANALYTICS_ENDPOINT)?;
        self.send_authed_json(builder, "Failed to fetch user analytics")
            .await
    }

    /// GET /analytics/dashboard/
    pub async fn get_dashboard_analytics(&self) -> Result<DashboardAnalytics> {
        let builder = self.authed_request(Method::GET, DASHBOARD_ANALYTICS_ENDPOINT)?;
        self.send_authed_json(builder, "Failed to fetch dashboard analytics")
            .await
    }
}
