// ============================================================
// INSIGHT TEXT
// ============================================================
// Canned AI recommendation text, one template per analysis category

use crate::domain::ai_request::AnalysisCategory;

const CONVERSION_BODY: &str = "\
Diagnosis
- Conversion rate is below the industry average and needs to improve
- A high bounce rate hurts retention and conversion
- The checkout flow may contain obstacles

Solutions
1. Redesign the conversion path on high-traffic pages
2. A/B test different CTA buttons and form layouts
3. Improve content relevance on pages with a high bounce rate
4. Run remarketing to win back lost visitors

Expected impact
- Conversion rate up 15-25% after rollout
- Bounce rate down 5-10%
- Average session duration up 10-20%";

const TRAFFIC_BODY: &str = "\
Diagnosis
- Traffic sources are too concentrated and need diversifying
- Organic search traffic has room to grow
- Social media accounts for a small share of traffic

Solutions
1. Invest in SEO to grow organic traffic
2. Strengthen the social media marketing strategy
3. Build referral partnerships
4. Use content marketing to attract the target audience

Expected impact
- Overall traffic up 20-30% after rollout
- Lower risk through diversified traffic sources
- Higher brand awareness and exposure";

const ENGAGEMENT_BODY: &str = "\
Diagnosis
- User engagement needs to improve
- Pages lack interactive elements
- Content is not compelling enough

Solutions
1. Add interactive elements to raise participation
2. Rework the content strategy to deliver more value
3. Introduce personalized recommendations
4. Build a user community to encourage interaction

Expected impact
- User engagement up 25-35% after rollout
- Longer time on page
- Higher returning visitor rate";

const DEFAULT_BODY: &str = "\
Diagnosis
- Overall site performance needs optimizing
- User experience has room for improvement
- Data tracking and analysis need strengthening

Solutions
1. Speed up page loads and smooth the user experience
2. Improve mobile responsiveness
3. Refine on-site search and navigation
4. Set up end-to-end data tracking

Expected impact
- Overall performance up 20-30% after rollout
- Better user satisfaction
- Stronger business conversion";

/// Recommendation text for `category`, opening with the user's own words
pub fn insight_text(category: AnalysisCategory, pain_points: &str) -> String {
    let body = match category {
        AnalysisCategory::Conversion => CONVERSION_BODY,
        AnalysisCategory::Traffic => TRAFFIC_BODY,
        AnalysisCategory::Engagement => ENGAGEMENT_BODY,
        AnalysisCategory::Unset => DEFAULT_BODY,
    };

    format!(
        "Regarding your pain point \"{}\", here is an analysis based on your site data:\n\n{}",
        pain_points, body
    )
}
