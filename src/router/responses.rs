// Fixed reply texts for the cascade's terminal states

/// Reply for an empty or whitespace-only message
pub const EMPTY_MESSAGE_REPLY: &str = "Please provide a message.";

/// Safety reply for crisis-flagged input: immediate-danger guidance, the
/// 988 hotline, and a referral resource
pub const CRISIS_REPLY: &str = "I'm really sorry you're feeling this way. If you are in immediate danger or \
thinking about harming yourself, please contact your local emergency services right now. \
If you can, consider contacting a crisis hotline — for example, in the United States call or text 988, \
or find local resources at https://www.opencounseling.com/suicide-hotlines. \
You don't have to go through this alone; reach out to someone you trust or a professional.";

/// Generic coping-strategies reply when no other stage produced an answer
pub const STATIC_FALLBACK_REPLY: &str = "Thanks for sharing — I hear you. While I might not have specific advice for this topic, \
here are some universally helpful strategies: \n\n\
1) 🫁 **Breathe**: Take slow, deep breaths for one minute.\n\
2) 🧘 **Ground yourself**: Name five things you can see around you.\n\
3) 🚶 **Move**: Try a short walk or a change of scene.\n\
4) 💬 **Talk**: Reach out to someone you trust.\n\
5) 👨‍⚕️ **Get professional help**: A therapist or counselor can provide real support.\n\n\
Feel free to ask me about anxiety, stress, sleep, relationships, depression, or any other mental health topic!";
