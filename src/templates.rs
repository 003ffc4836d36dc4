//! Fixed response lists. Everything here is static data; the generator picks
//! from these when no custom phrase or hosted model is used.

pub const NAME_PLACEHOLDER: &str = "{name}";
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// Built-in teases used when nothing better is available
pub const FALLBACK_RESPONSES: &[&str] = &[
    "Trông bạn hôm nay như thể vừa từ cuộc chiến với thức khuya và cà phê trở về vậy.",
    "Nếu sự lười biếng là một nghề, bạn chắc hẳn đã là CEO rồi.",
    "Mỗi lần bạn nói chuyện, não tôi tự động chuyển sang chế độ máy bay.",
    "Thái độ của bạn như thời tiết ấy - thất thường và thường khó chịu.",
    "Bạn đúng là hiện thân của câu nói 'cố lên nhưng đừng cố quá'.",
    "Tôi thích phong cách của bạn đấy - một phong cách mà không ai cố bắt chước.",
    "Nếu sự khó hiểu là một môn thể thao, bạn sẽ giành huy chương vàng.",
    "Bạn khiến tôi nhớ đến Google, vì bạn có tất cả các câu trả lời nhưng hầu hết đều không liên quan.",
    "Cách bạn ăn mặc thật độc đáo, nhìn như thể tủ quần áo của bạn quyết định trả thù vậy.",
    "Bạn thật là đặc biệt, như một bông tuyết - rơi xuống và tan biến không để lại dấu vết gì.",
    "Còn ai hiểu rõ về thất bại hơn bạn chứ? Bạn đúng là chuyên gia trong lĩnh vực này.",
    "Bạn giống như một tác phẩm nghệ thuật vậy - không phải ai cũng hiểu được.",
    "Bạn nói tiếng Việt như người mới học vậy - đáng yêu nhưng khó hiểu.",
    "Nhìn bạn gõ bàn phím như nhìn gà bới thóc ấy, công nhận là có tài.",
    "Với khả năng của bạn, việc đơn giản cũng thành phức tạp được, quả là tài năng hiếm có.",
    "Tự tin như kiểu bạn biết mình đang làm gì vậy, đáng nể thật.",
    "Code của bạn như nồi canh - nhiều thứ quá nên không ai biết vị gì.",
    "Git commit của bạn giống như bài văn lớp 1 vậy - ngắn, khó hiểu và thiếu chủ đề.",
    "Bạn debug như tìm kim trong đống rơm vậy, nhưng kim thì không có, chỉ toàn rơm thôi.",
    "Bạn đặt tên biến như đặt tên con vậy - ngẫu hứng và không ai hiểu được ý nghĩa.",
    "Bạn là phiên bản đời thực của meme 'confused math lady' đấy.",
    "Tôi nghe bạn nói nhưng tất cả những gì tôi thấy là meme 'this is fine' khi mọi thứ đang cháy xung quanh.",
    "Bạn khiến tôi nhớ đến meme 'they don't know' - đứng một mình và nghĩ mình đặc biệt lắm.",
    "Khuôn mặt bạn khi nghe tin này chắc như meme 'surprised Pikachu' nhỉ?",
    "Bạn làm việc cực kỳ chăm chỉ... trong việc tránh làm việc.",
    "IQ của bạn rất cao, nó chỉ đang đi nghỉ mát thôi.",
    "Bạn có điểm mạnh là luôn đúng giờ... khi đi ăn.",
    "Mỗi khi bạn có ý tưởng mới, cả thế giới lại thêm một câu chuyện cười.",
    "Bạn thật là... đặc biệt. Đúng là không ai giống bạn nổi.",
    "Tôi muốn nói điều gì đó tích cực về bạn, nhưng hôm nay tôi không có nhiều thời gian.",
    "Wow, tôi chưa từng thấy ai có thể tự tin như bạn với ít lý do đến vậy.",
    "Nếu sự lười biếng là một môn nghệ thuật, bạn sẽ được treo trong bảo tàng.",
    "Bạn có năng khiếu đặc biệt trong việc làm người khác tự hỏi bạn đang nghĩ gì.",
    "Đừng lo, bạn không tệ nhất đâu. Có người còn tệ hơn. Chỉ là tôi chưa gặp thôi.",
    "Vũ trụ thật rộng lớn và bạn là minh chứng cho thấy nó không có giới hạn.",
    "Nhìn bạn làm việc như xem phim tua chậm vậy, quá sức hấp dẫn.",
    "Đúng là phải làm quen với bạn mới thấy được 'cá tính' của bạn.",
    "Bạn như một cuốn từ điển vậy - cũng đầy chữ nhưng hiếm khi được mở ra.",
    "Bạn có tài năng tự nhiên trong việc làm mọi thứ phức tạp hơn, đáng nể thật!",
];

/// Personalised teases; `{name}` is replaced with the target
pub const SMART_TEMPLATES: &[&str] = &[
    "{name} đúng là người đặc biệt - có thể làm chậm bất kỳ cuộc trò chuyện nào chỉ bằng cách tham gia.",
    "Nếu {name} mà nỗ lực chăm chỉ như cách viện lý do, thì chắc đã trở thành thiên tài rồi.",
    "Tôi thấy sự tự tin của {name} thật đáng nể, nhất là khi không có lý do gì để tự tin cả.",
    "Mỗi khi {name} mở miệng, não mọi người như tự động chuyển sang chế độ máy bay.",
    "Nói chuyện với {name} giống như đọc Wikipedia - dài dòng và phần lớn là không chính xác.",
    "Năng lượng tiêu cực của {name} đủ để cấp điện cho cả thành phố.",
    "Tôi nghĩ {name} đáng được lên phim đấy - như một ví dụ điển hình về cách không nên cư xử.",
    "Mỗi lần {name} đưa ra ý kiến, cả nhóm lại có thêm động lực... để làm ngược lại.",
    "Thành tựu lớn nhất của {name} là khả năng biến công việc 5 phút thành dự án kéo dài cả ngày.",
    "Cách {name} xử lý vấn đề giống như cách tôi xử lý toán học phức tạp - tránh né hoàn toàn.",
    "Nếu sự lười biếng là một kỹ năng, {name} sẽ là chuyên gia thế giới.",
    "Chắc hẳn {name} phải rất mệt mỏi - bởi việc chạy trốn trách nhiệm cả ngày không hề dễ dàng.",
    "IQ của {name} chắc không cao lắm, nhưng sự tự tin thì vô hạn.",
    "Làm quen với {name} khiến tôi đánh giá lại định nghĩa về sự kiên nhẫn của mình.",
    "{name} đúng là biết cách làm tôi cười - không phải vì hài hước, mà vì những quyết định kỳ lạ.",
    "Tôi ngưỡng mộ cách {name} có thể nói nhiều mà không truyền đạt được gì.",
    "Trí tưởng tượng của {name} thật phong phú, đặc biệt khi nghĩ ra lý do để không làm việc.",
    "Tôi chưa bao giờ gặp ai như {name} - có thể biến mọi tình huống đơn giản thành phức tạp.",
];

/// Fake quotes; `{topic}` is replaced with the topic
pub const QUOTE_TEMPLATES: &[&str] = &[
    "Trong cuộc sống, điều quan trọng không phải là {topic}, mà là cách bạn từ chối tham gia vào {topic}.",
    "Thành công trong {topic} không đến từ việc nỗ lực, mà từ việc đổ lỗi cho người khác khi thất bại.",
    "Có hai loại người trên đời: những người giỏi {topic} và những người giống tôi.",
    "Không ai thất bại trong {topic} nhiều như tôi, đó là lý do tôi được coi là chuyên gia.",
    "Tôi không phải là người giỏi nhất về {topic}, nhưng tôi chắc chắn là người nói nhiều nhất về nó.",
    "Một ngày không {topic} là một ngày không hoàn chỉnh... đó là lý do tôi luôn sống không trọn vẹn.",
    "Mọi người đều nghĩ tôi biết về {topic}, nhưng sự thật là tôi chỉ giỏi việc Google thôi.",
    "Khi còn trẻ, tôi mơ ước được trở thành chuyên gia {topic}. Giờ tôi vẫn mơ ước như vậy.",
    "Đừng bao giờ từ bỏ {topic}. Thực ra, hãy từ bỏ đi, vì có lẽ bạn không giỏi về nó.",
    "Người khôn ngoan học từ thất bại của người khác trong {topic}. Tôi để người khác học từ thất bại của mình.",
    "Nếu bạn không thể làm tốt {topic}, hãy dạy nó. Nếu không dạy được, hãy viết sách về nó.",
    "Bí quyết thành công trong {topic} là không bao giờ chia sẻ bí quyết của bạn.",
    "Trong {topic}, thất bại không phải là một lựa chọn - đó là đặc quyền của tôi.",
    "Có những người tạo ra lịch sử trong {topic}, và có những người như tôi - chỉ xem TikTok về nó.",
    "Cuộc sống quá ngắn ngủi để học {topic} đúng cách - đó là lý do tôi luôn làm ẩu.",
    "Người thành công trong {topic} là người thất bại nhiều nhất, nhưng thất bại một cách khôn ngoan - còn tôi thì không.",
];
