// ABOUTME: Scripted keyword responder mapping chat input to canned advice templates
// ABOUTME: Ordered (predicate, template) rule table evaluated top to bottom, first match wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scripted Responder
//!
//! Matching is plain substring membership on the lower-cased input. There is
//! no semantic matching: "What's for dinner?" contains none of the meal
//! keywords and falls through to the generic reply.

use nutribuddy_core::models::DietType;
use serde::{Deserialize, Serialize};

/// Opening assistant message of every transcript
pub const GREETING: &str = "Hello! I'm your AI nutrition and fitness assistant. I can help you with meal planning, workout suggestions, and answer any health-related questions you might have. How can I assist you today?";

/// Suggested prompts offered alongside the chat input
pub const QUICK_QUESTIONS: [&str; 4] = [
    "How can I lose weight?",
    "Suggest healthy meals",
    "Create a workout plan",
    "Water intake tips",
];

/// Template selected for an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTopic {
    /// "weight" and "lose" both present
    WeightLoss,
    /// "meal", "food", or "eat" present
    Meal,
    /// "exercise" or "workout" present
    Exercise,
    /// "water" or "hydration" present
    Hydration,
    /// No rule matched
    General,
}

struct ResponseRule {
    topic: ResponseTopic,
    matches: fn(&str) -> bool,
}

const RULES: &[ResponseRule] = &[
    ResponseRule {
        topic: ResponseTopic::WeightLoss,
        matches: |text: &str| text.contains("weight") && text.contains("lose"),
    },
    ResponseRule {
        topic: ResponseTopic::Meal,
        matches: |text: &str| contains_any(text, &["meal", "food", "eat"]),
    },
    ResponseRule {
        topic: ResponseTopic::Exercise,
        matches: |text: &str| contains_any(text, &["exercise", "workout"]),
    },
    ResponseRule {
        topic: ResponseTopic::Hydration,
        matches: |text: &str| contains_any(text, &["water", "hydration"]),
    },
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Pick the template for `user_text`
#[must_use]
pub fn classify(user_text: &str) -> ResponseTopic {
    let lowered = user_text.to_lowercase();
    RULES
        .iter()
        .find(|rule| (rule.matches)(&lowered))
        .map_or(ResponseTopic::General, |rule| rule.topic)
}

/// Stateless responder carrying the diet preference used by the meal template
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedResponder {
    diet_type: DietType,
}

impl ScriptedResponder {
    /// Responder for a known diet preference
    #[must_use]
    pub const fn new(diet_type: DietType) -> Self {
        Self { diet_type }
    }

    /// Responder for an optional profile diet, defaulting to vegetarian
    #[must_use]
    pub fn for_diet(diet_type: Option<DietType>) -> Self {
        Self::new(diet_type.unwrap_or_default())
    }

    /// Canned reply for `user_text`
    #[must_use]
    pub fn respond(&self, user_text: &str) -> String {
        let topic = classify(user_text);
        tracing::debug!(?topic, "Scripted responder matched topic");
        self.render(topic)
    }

    /// Template text for a topic
    #[must_use]
    pub fn render(&self, topic: ResponseTopic) -> String {
        match topic {
            ResponseTopic::WeightLoss => WEIGHT_LOSS_TEMPLATE.to_owned(),
            ResponseTopic::Meal => MEAL_TEMPLATE.replace("{diet}", self.diet_type.as_str()),
            ResponseTopic::Exercise => EXERCISE_TEMPLATE.to_owned(),
            ResponseTopic::Hydration => HYDRATION_TEMPLATE.to_owned(),
            ResponseTopic::General => GENERAL_TEMPLATE.to_owned(),
        }
    }
}

/// Canned reply with the default (vegetarian) diet context
#[must_use]
pub fn respond(user_text: &str) -> String {
    ScriptedResponder::default().respond(user_text)
}

/// Weight-loss advice
pub const WEIGHT_LOSS_TEMPLATE: &str = "Based on your profile, here are some personalized weight loss tips:

1. **Calorie Deficit**: Aim for a moderate deficit of 500-750 calories per day
2. **Protein Intake**: Include protein in every meal to maintain muscle mass
3. **Hydration**: Drink water before meals to help with satiety
4. **Regular Exercise**: Combine cardio with strength training 3-4 times per week
5. **Sleep**: Ensure 7-9 hours of quality sleep for optimal metabolism

Would you like specific meal suggestions or workout routines?";

const MEAL_TEMPLATE: &str = "Great question about nutrition! Based on your {diet} diet preference, here are some healthy meal ideas:

**Breakfast:**
- Greek yogurt with berries and nuts
- Overnight oats with chia seeds
- Vegetable omelet with whole grain toast

**Lunch:**
- Quinoa salad with mixed vegetables
- Lentil soup with whole grain bread
- Buddha bowl with roasted vegetables

**Dinner:**
- Grilled tofu/chicken with steamed vegetables
- Stir-fry with brown rice
- Baked sweet potato with black beans

Remember to include a variety of colors in your meals for optimal nutrition!";

/// Workout plan advice
pub const EXERCISE_TEMPLATE: &str = "Here's a balanced workout plan for your fitness level:

**Beginner (3 days/week):**
- 30 minutes brisk walking
- 2 sets of bodyweight exercises (squats, push-ups, lunges)
- 10 minutes stretching

**Intermediate (4 days/week):**
- 45 minutes cardio (alternating between running and cycling)
- 3 sets of strength training
- Core exercises and flexibility work

**Advanced (5-6 days/week):**
- High-intensity interval training (HIIT)
- Weight training with progressive overload
- Active recovery with yoga or swimming

Always listen to your body and rest when needed!";

/// Hydration advice
pub const HYDRATION_TEMPLATE: &str = "Excellent question about hydration! Here's why water is crucial for your health:

**Daily Goals:**
- Aim for 8-10 glasses of water per day
- Increase intake during exercise or hot weather
- Monitor urine color (pale yellow is ideal)

**Benefits:**
- Boosts metabolism and aids weight loss
- Improves skin health and appearance
- Enhances cognitive function and mood
- Helps with digestion and nutrient absorption

**Tips:**
- Start your day with a glass of water
- Set reminders every 2 hours
- Add lemon or cucumber for flavor
- Eat water-rich foods like fruits and vegetables";

/// Generic fallback
pub const GENERAL_TEMPLATE: &str = "Thank you for your question! I'm here to help with nutrition and fitness advice. Some topics I can assist with include:

- Meal planning and healthy recipes
- Weight management strategies
- Exercise routines and fitness tips
- Hydration and nutrition guidance
- Healthy lifestyle habits

Feel free to ask me anything specific about your health and fitness journey!";
