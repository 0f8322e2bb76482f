//! The built-in node catalog: every node type the editor ships, as data.

use super::{Category, FieldSpec, NodeRegistry, NodeTypeConfig};
use crate::error::RegistryError;

/// Registers the stock node types.
pub(super) fn populate(registry: &mut NodeRegistry) -> Result<(), RegistryError> {
    // Core
    registry.register(
        "flowBasics",
        NodeTypeConfig::new(
            Category::Core,
            "Flow Basics",
            "Define a flow input with a default value, a name, and an optional user-facing prompt.",
        )
        .field(FieldSpec::text("defaultvalue", "Default value").placeholder("tim@hubspot.com"))
        .field(FieldSpec::text("inputname", "Input name").placeholder("email"))
        .field(FieldSpec::switch("showasuserinput", "Show as user input"))
        .field(FieldSpec::text("description", "Description").placeholder("The email of the new user."))
        .output_record(&[("value", "defaultvalue"), ("name", "inputname")]),
    )?;

    // AI
    registry.register(
        "askAI",
        NodeTypeConfig::new(
            Category::Ai,
            "Ask AI",
            "Prompt an AI language model. Provide all relevant context and use detailed prompts to get the best results.",
        )
        .field(FieldSpec::textarea("prompt", "Prompt").placeholder("Summarize the article in the context"))
        .field(FieldSpec::textarea("context", "Context").placeholder(
            "(Optional) This is additional context for the AI model that can be referenced in the prompt",
        ))
        .output_record(&[("prompt", "prompt"), ("context", "context")]),
    )?;

    registry.register(
        "extractData",
        NodeTypeConfig::new(
            Category::Ai,
            "Extract Data",
            "Extract specific data points from text using AI.",
        )
        .field(FieldSpec::text("fieldtoextract", "Field to Extract").placeholder("Enter field name or path"))
        .field(FieldSpec::text("defaultvalue", "Default Value").placeholder("Default value if field is not found"))
        .field(FieldSpec::switch("strictmode", "Strict Mode").advanced()),
    )?;

    registry.register(
        "categorizer",
        NodeTypeConfig::new(
            Category::Ai,
            "Categorizer",
            "Categorize text into predefined or AI-generated categories.",
        )
        .field(FieldSpec::textarea("texttocategorize", "Text to Categorize").placeholder("Enter or connect text to categorize"))
        .field(FieldSpec::text("categories", "Categories").placeholder("Enter categories separated by commas")),
    )?;

    registry.register(
        "summarizer",
        NodeTypeConfig::new(
            Category::Ai,
            "Summarizer",
            "Generate concise summaries of longer texts.",
        )
        .field(FieldSpec::textarea("texttosummarize", "Text to Summarize").placeholder("Enter or connect text to summarize"))
        .field(FieldSpec::text("maxlength", "Max Length").placeholder("Maximum length of summary")),
    )?;

    registry.register(
        "scorer",
        NodeTypeConfig::new(
            Category::Ai,
            "Scorer",
            "Score or rate text based on specific criteria.",
        )
        .field(FieldSpec::textarea("texttoscore", "Text to Score").placeholder("Enter or connect text to score"))
        .field(FieldSpec::text("criteria", "Criteria").placeholder("Enter scoring criteria")),
    )?;

    // Web scraping
    registry.register(
        "websiteScraper",
        NodeTypeConfig::new(
            Category::WebScraping,
            "Website Scraper",
            "Extract data from a specific webpage URL.",
        )
        .field(FieldSpec::text("url", "URL").placeholder("Enter website URL"))
        .field(FieldSpec::text("cssselector", "CSS Selector").placeholder("Enter CSS selector to target specific elements")),
    )?;

    registry.register(
        "websiteCrawler",
        NodeTypeConfig::new(
            Category::WebScraping,
            "Website Crawler",
            "Crawl multiple pages of a website following specific patterns.",
        )
        .field(FieldSpec::text("starturl", "Start URL").placeholder("Enter starting URL"))
        .field(FieldSpec::text("urlpattern", "URL Pattern").placeholder("Enter URL pattern to follow"))
        .field(FieldSpec::text("maxpages", "Max Pages").placeholder("Maximum number of pages to crawl").advanced()),
    )?;

    registry.register(
        "webAgentScraper",
        NodeTypeConfig::new(
            Category::WebScraping,
            "Web Agent Scraper",
            "Use AI to intelligently navigate and extract data from websites.",
        )
        .field(FieldSpec::text("url", "URL").placeholder("Enter website URL"))
        .field(FieldSpec::textarea("instructions", "Instructions").placeholder("Describe what data to find and extract")),
    )?;

    registry.register(
        "aiWebBrowser",
        NodeTypeConfig::new(
            Category::WebScraping,
            "AI Web Browser",
            "Browse websites autonomously using AI to find specific information.",
        )
        .field(FieldSpec::text("startingurl", "Starting URL").placeholder("Enter starting URL"))
        .field(FieldSpec::textarea("searchgoal", "Search Goal").placeholder("Describe what information to find")),
    )?;

    // Text manipulation
    registry.register(
        "combineText",
        NodeTypeConfig::new(
            Category::Text,
            "Combine Text",
            "Combine multiple text inputs into a single output.",
        )
        .field(FieldSpec::textarea("textinputs", "Text Inputs").placeholder("Enter or connect text inputs"))
        .field(FieldSpec::text("separator", "Separator").placeholder("Text to insert between combined texts")),
    )?;

    registry.register(
        "textFormatter",
        NodeTypeConfig::new(
            Category::Text,
            "Text Formatter",
            "Format text using various transformations and styles.",
        )
        .field(FieldSpec::textarea("inputtext", "Input Text").placeholder("Enter or connect text to format"))
        .field(FieldSpec::text("formatrules", "Format Rules").placeholder("Enter formatting rules")),
    )?;

    registry.register(
        "findReplace",
        NodeTypeConfig::new(
            Category::Text,
            "Find & Replace",
            "Find and replace text patterns using regex or simple string matching.",
        )
        .field(FieldSpec::text("findpattern", "Find Pattern").placeholder("Text or regex pattern to find"))
        .field(FieldSpec::text("replacewith", "Replace With").placeholder("Text to replace matches with"))
        .field(FieldSpec::switch("useregex", "Use Regex").advanced()),
    )?;

    registry.register(
        "splitText",
        NodeTypeConfig::new(
            Category::Text,
            "Split Text",
            "Split text into multiple outputs based on a delimiter.",
        )
        .field(FieldSpec::textarea("inputtext", "Input Text").placeholder("Enter or connect text to split"))
        .field(FieldSpec::text("delimiter", "Delimiter").placeholder("Character or pattern to split on")),
    )?;

    registry.register(
        "chunkText",
        NodeTypeConfig::new(
            Category::Text,
            "Chunk Text",
            "Split text into chunks of specified size while preserving content integrity.",
        )
        .field(FieldSpec::textarea("inputtext", "Input Text").placeholder("Enter or connect text to chunk"))
        .field(FieldSpec::text("chunksize", "Chunk Size").placeholder("Maximum size of each chunk"))
        .field(FieldSpec::switch("preservewords", "Preserve Words").advanced()),
    )?;

    // Integrations
    registry.register(
        "github",
        NodeTypeConfig::new(
            Category::Integration,
            "GitHub",
            "Connect and interact with GitHub repositories, issues, and pull requests",
        )
        .field(FieldSpec::text("repository", "Repository").placeholder("owner/repository"))
        .field(FieldSpec::switch("connected", "Connected")),
    )?;

    registry.register(
        "postgres",
        NodeTypeConfig::new(
            Category::Integration,
            "PostgreSQL",
            "Connect to PostgreSQL databases",
        )
        .field(FieldSpec::textarea("query", "Query").placeholder("Enter SQL query")),
    )?;

    registry.register(
        "slackMessageSender",
        NodeTypeConfig::new(
            Category::Integration,
            "Slack Message Sender",
            "Send message to Slack",
        )
        .field(FieldSpec::switch("connectedtoslack", "Connected to Slack"))
        .field(FieldSpec::text("channel", "Channel").placeholder("#channel-name or @username"))
        .field(FieldSpec::textarea("message", "Message").placeholder("Enter message content")),
    )?;

    registry.register(
        "slackMessageReader",
        NodeTypeConfig::new(
            Category::Integration,
            "Slack Message Reader",
            "Get recent Slack messages",
        )
        .field(FieldSpec::switch("connectedtoslack", "Connected to Slack"))
        .field(FieldSpec::text("channel", "Channel").placeholder("#channel-name or @username"))
        .field(FieldSpec::text("messagecount", "Message Count").placeholder("Number of messages to fetch")),
    )?;

    registry.register(
        "slackCanvasWriter",
        NodeTypeConfig::new(
            Category::Integration,
            "Slack Canvas Writer",
            "Create Slack Canvas",
        )
        .field(FieldSpec::switch("connectedtoslack", "Connected to Slack"))
        .field(FieldSpec::text("channel", "Channel").placeholder("#channel-name"))
        .field(FieldSpec::text("canvastitle", "Canvas Title").placeholder("Enter canvas title"))
        .field(FieldSpec::textarea("canvascontent", "Canvas Content").placeholder("Enter canvas content")),
    )?;

    registry.register(
        "s3",
        NodeTypeConfig::new(
            Category::Integration,
            "AWS S3",
            "Store and retrieve files from S3",
        )
        .field(FieldSpec::text("bucket", "Bucket").placeholder("Enter S3 bucket name")),
    )?;

    registry.register(
        "gmail",
        NodeTypeConfig::new(
            Category::Integration,
            "Gmail",
            "Send and manage emails through your Gmail account",
        )
        .field(FieldSpec::switch("connectedtogmail", "Connected to Gmail"))
        .field(FieldSpec::text("to", "To").placeholder("recipient@example.com"))
        .field(FieldSpec::text("subject", "Subject").placeholder("Email subject"))
        .field(FieldSpec::textarea("message", "Message").placeholder("Email content"))
        .field(FieldSpec::switch("htmlformat", "HTML Format").advanced()),
    )?;

    registry.register(
        "discord",
        NodeTypeConfig::new(
            Category::Integration,
            "Discord",
            "Send messages and interact with Discord servers",
        )
        .field(FieldSpec::switch("connectedtodiscord", "Connected to Discord"))
        .field(FieldSpec::text("server", "Server").placeholder("Select Discord server"))
        .field(FieldSpec::text("channel", "Channel").placeholder("#channel-name"))
        .field(FieldSpec::textarea("message", "Message").placeholder("Enter message content"))
        .field(FieldSpec::switch("sendasbot", "Send as Bot").advanced()),
    )?;

    registry.register(
        "twilio",
        NodeTypeConfig::new(
            Category::Integration,
            "Twilio",
            "Send SMS and WhatsApp messages via Twilio",
        )
        .field(FieldSpec::switch("connectedtotwilio", "Connected to Twilio"))
        .field(FieldSpec::text("tophone", "To Phone").placeholder("+1234567890"))
        .field(FieldSpec::textarea("message", "Message").placeholder("Message content"))
        .field(FieldSpec::switch("usewhatsapp", "Use WhatsApp").advanced()),
    )?;

    Ok(())
}
